mod nature;
mod stat;
mod r#type;

pub use nature::Nature;
pub use stat::{
    PartialStats,
    Stat,
    StatMap,
    Stats,
    StatsEntries,
};
pub use r#type::{
    Type,
    TypeChart,
    TypeEffectiveness,
    TypeTable,
};
