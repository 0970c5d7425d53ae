mod accessibility;
pub use accessibility::*;

mod auto_id;
pub use auto_id::*;

mod colors;
pub use colors::*;

mod element_id;
pub use element_id::*;

mod transitions;
pub use transitions::*;
