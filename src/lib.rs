mod api;
mod bindings;
mod checkout;
mod client;
mod components;
mod interop;
mod model;
mod money;

pub use api::*;
pub use bindings::*;
pub use checkout::*;
pub use client::*;
pub use components::*;
pub use interop::*;
pub use model::*;
pub use money::*;
