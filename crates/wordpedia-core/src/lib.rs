pub mod error;
pub mod lexical;
pub mod lookup;
pub mod pipeline;
pub mod preprocess;
pub mod prompt;
pub mod query;
pub mod session;
pub mod similarity;

#[cfg(test)]
mod testing;

pub use error::LookupError;
pub use lexical::CandidateList;
pub use lookup::WordLookup;
pub use pipeline::RankingPipeline;
pub use query::QueryWord;
pub use session::Session;
