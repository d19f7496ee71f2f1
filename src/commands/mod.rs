pub mod content;
pub mod dashboard;
pub mod scan;
pub mod session;

pub use content::*;
pub use dashboard::*;
pub use scan::*;
pub use session::*;
