mod check;
mod init;
mod input;
mod render;
mod tokens;

pub use check::CheckArgs;
pub use init::InitArgs;
pub use input::FormulaInput;
pub use render::RenderArgs;
pub use tokens::TokensArgs;
