mod location;
mod login;
mod person;

pub use location::{City, Country, Location, State};
pub use login::LoginOut;
pub use person::{HairColor, Person, PersonBase, PersonOut, PersonUpdate};
