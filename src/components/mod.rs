mod checkbox;
pub use checkbox::*;

mod checkbox_group;
pub use checkbox_group::*;

mod hint_text;
pub use hint_text::*;

mod label;
pub use label::*;

mod status_text;
pub use status_text::*;
