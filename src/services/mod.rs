pub mod keyword;
pub mod responder;
pub mod upstream;
