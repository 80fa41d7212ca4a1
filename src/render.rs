//! HTML fragments for the portal pages.

use askama::Template;

use crate::errors::AppError;
use crate::models::event::Event;

#[derive(Template)]
#[template(path = "fragments/upcoming_events.html")]
struct UpcomingEventsTemplate<'a> {
    events: &'a [Event],
}

#[derive(Template)]
#[template(path = "fragments/event_options.html")]
struct EventOptionsTemplate<'a> {
    events: &'a [Event],
}

/// One `<div class="event">` card per event, in the given order.
pub fn upcoming_events(events: &[Event]) -> Result<String, AppError> {
    Ok(UpcomingEventsTemplate { events }.render()?)
}

/// `<option>` elements for the event picker, valued by event id.
pub fn event_options(events: &[Event]) -> Result<String, AppError> {
    Ok(EventOptionsTemplate { events }.render()?)
}
