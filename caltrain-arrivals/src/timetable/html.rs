//! `scraper`-backed implementation of the table DOM seam.

use scraper::{ElementRef, Html, Selector};

use super::error::{ExtractError, StructuralError};
use super::extract::{Timetable, extract_trains};
use super::grid::TableNode;

/// Selects the direction table bodies.
pub const TABLE_SELECTOR: &str = "tbody";

/// A node of a parsed `scraper` document.
///
/// Only elements carry anything extraction reads; text and comment nodes
/// are kept as `Other` so the filter can drop them.
#[derive(Debug, Clone)]
pub enum HtmlNode<'a> {
    Element(ElementRef<'a>),
    Other,
}

impl TableNode for HtmlNode<'_> {
    fn is_element(&self) -> bool {
        matches!(self, HtmlNode::Element(_))
    }

    fn children(&self) -> Vec<Self> {
        match self {
            HtmlNode::Element(element) => element
                .children()
                .map(|child| match ElementRef::wrap(child) {
                    Some(element) => HtmlNode::Element(element),
                    None => HtmlNode::Other,
                })
                .collect(),
            HtmlNode::Other => Vec::new(),
        }
    }

    fn text(&self) -> String {
        match self {
            HtmlNode::Element(element) => element.text().collect(),
            HtmlNode::Other => String::new(),
        }
    }

    fn attr(&self, name: &str) -> Option<&str> {
        match self {
            HtmlNode::Element(element) => element.value().attr(name),
            HtmlNode::Other => None,
        }
    }
}

/// Parse a timetable page and extract every train and station on it.
pub fn extract_from_html(html: &str) -> Result<Timetable, ExtractError> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(TABLE_SELECTOR)
        .map_err(|_| StructuralError::InvalidSelector(TABLE_SELECTOR))?;

    let tables: Vec<HtmlNode<'_>> = document.select(&selector).map(HtmlNode::Element).collect();

    extract_trains(&tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClockTime, Direction, ServiceType, Station};

    const PAGE: &str = r#"
        <html><body>
        <table class="northbound">
          <tbody>
            <tr><td></td><td></td><td>101</td><td>103</td></tr>
            <tr><td></td><td></td><td>L1</td><td>L4</td></tr>
            <tr><td>6</td><td>Gilroy</td><td>5:00am</td><td>--</td></tr>
            <tr class="zone-change"><td colspan="4">Zone 5</td></tr>
            <tr><td>5</td><td>Morgan Hill</td><td>5:16am</td><td>6:02am</td></tr>
          </tbody>
        </table>
        <table class="southbound">
          <tbody>
            <tr><td></td><td></td><td style="display: none">999</td><td>102</td></tr>
            <tr><td></td><td></td><td style="display: none">XX</td><td>B7</td></tr>
            <tr><td>1</td><td>San Francisco</td><td style="display: none">?</td><td>12:05pm</td></tr>
          </tbody>
        </table>
        </body></html>
    "#;

    #[test]
    fn extracts_both_directions() {
        let trains = extract_from_html(PAGE).unwrap().trains;
        assert_eq!(trains.len(), 3);

        let numbers: Vec<_> = trains.iter().map(|t| (t.number, t.direction)).collect();
        assert_eq!(
            numbers,
            [
                (101, Direction::Northbound),
                (103, Direction::Northbound),
                (102, Direction::Southbound),
            ]
        );

        assert_eq!(trains[0].stops().len(), 2);
        assert_eq!(trains[1].service, ServiceType::Limited4);
        assert_eq!(trains[1].stops().len(), 1);
        assert_eq!(trains[1].stops()[0].station.name, "Morgan Hill");

        let sf = &trains[2].stops()[0];
        assert_eq!(sf.station.zone, 1);
        assert_eq!(sf.time, ClockTime::from_hm(12, 5).unwrap());
    }

    #[test]
    fn zone_change_rows_are_not_stations() {
        let stations = extract_from_html(PAGE).unwrap().stations;
        assert_eq!(
            stations,
            [
                Station::new("Gilroy", 6),
                Station::new("Morgan Hill", 5),
                Station::new("San Francisco", 1),
            ]
        );
    }

    #[test]
    fn page_without_tables_fails() {
        let err = extract_from_html("<html><body><p>maintenance</p></body></html>").unwrap_err();
        assert_eq!(
            err,
            ExtractError::from(StructuralError::MissingTables { found: 0 })
        );
    }
}
