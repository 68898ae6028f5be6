//! Timetable extraction.
//!
//! Turns the timetable page's direction tables into [`Train`] values and
//! the list of stations their rows name.
//! The HTML is only touched through the [`TableNode`] trait, so the
//! extraction logic is independent of the HTML parser.
//!
//! [`Train`]: crate::domain::Train

mod error;
mod extract;
mod grid;
mod html;

pub use error::{ExtractError, ParseError, StructuralError};
pub use extract::{NO_STOP, Timetable, extract_direction, extract_trains};
pub use grid::{Grid, TableNode, is_schedule_node};
pub use html::{HtmlNode, TABLE_SELECTOR, extract_from_html};
