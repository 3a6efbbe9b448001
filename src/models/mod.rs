pub mod message;
pub mod notification;
pub mod response;
pub mod validation;
