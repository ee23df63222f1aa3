pub mod county_counter;
pub mod growth_ranker;
pub mod value_totaler;

pub use county_counter::distinct_county_count;
pub use growth_ranker::{rank_by_growth, CountyGrowth};
pub use value_totaler::total_tiv_2012;
