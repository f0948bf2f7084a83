//! Identity provider resources
//!
//! Typed, passthrough representations of the records returned by the API.
//! Unknown fields are ignored on decode and absent fields stay `None`, so
//! these types never carry more state than the provider sent.

mod app;
mod event;
mod user;

pub use app::{App, AppDetails, AppQuery};
pub use event::{Event, EventType, EventsQuery};
pub use user::{NewUser, User, UserQuery, UserUpdate};
