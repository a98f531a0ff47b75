mod declaration;
mod taxpayer_category;
mod test_case;
mod verdict;

pub use declaration::DeclarationInput;
pub use taxpayer_category::TaxpayerCategory;
pub use test_case::TestCase;
pub use verdict::{Verdict, VerdictCategory};
