pub mod console;
pub mod validator;
pub mod writer;

pub use validator::ResponseValidator;
pub use writer::ReportWriter;
