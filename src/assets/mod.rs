mod assets;
pub use assets::*;

mod forms_assets;
pub use forms_assets::*;
