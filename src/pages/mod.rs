pub mod calendar;
pub mod subjects;
pub mod todo;

use crate::application::Desk;
use crate::message::Section;

/// Render the active panel. Pages only read controller state; every
/// mutation routes through [`Desk::update`].
pub fn view(desk: &Desk) -> String {
    match desk.active_section() {
        Section::Todo => todo::view(desk),
        Section::Calendar => calendar::view(desk),
        Section::Subjects => subjects::view(desk),
    }
}
