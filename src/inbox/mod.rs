//! Inbox state: conversation list, chat, assist panel and the controller that composes them

mod assist;
mod chat;
mod controller;
mod effect;
mod list;


pub use assist::*;
pub use chat::*;
pub use controller::*;
pub use effect::*;
pub use list::*;
