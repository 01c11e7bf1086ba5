pub mod platform;
pub mod value;
pub mod variable;

pub use platform::Platform;
pub use value::TokenValue;
pub use variable::Variable;
