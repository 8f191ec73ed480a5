mod contact;
mod create_person;
mod health_check;
mod home;
mod login;
mod openapi;
mod person_detail;
mod post_image;
mod request;
mod response;
mod show_person;
mod update_person;
mod validated;


pub use contact::contact;
pub use create_person::create_person;
pub use health_check::health_check;
pub use home::home;
pub use login::login;
pub use openapi::openapi_document;
pub use person_detail::person_detail;
pub use post_image::post_image;
pub use show_person::show_person;
pub use update_person::update_person;
