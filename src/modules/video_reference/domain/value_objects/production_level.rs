use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, DbEnum)]
#[ExistingTypePath = "crate::schema::sql_types::ProductionLevel"]
#[serde(rename_all = "snake_case")]
pub enum ProductionLevel {
    Amateur,
    SemiPro,
    Pro,
}

impl ProductionLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductionLevel::Amateur => "amateur",
            ProductionLevel::SemiPro => "semi_pro",
            ProductionLevel::Pro => "pro",
        }
    }
}

impl fmt::Display for ProductionLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
