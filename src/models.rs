// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Bills,
    Entertainment,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Transport,
        Category::Bills,
        Category::Entertainment,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Bills => "Bills",
            Category::Entertainment => "Entertainment",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

/// One logged expense. Immutable once appended to a ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: i64,
    pub date: NaiveDate,
    pub category: Category,
    #[serde(with = "amount_serde")]
    pub amount: Decimal,
    #[serde(default)]
    pub description: String,
}

pub type Ledger = Vec<ExpenseRecord>;

/// Amounts are persisted as JSON numbers. Both directions go through the
/// shortest `f64` representation so a stored amount reloads unchanged.
pub(crate) fn amount_from_f64(f: f64) -> Option<Decimal> {
    if !f.is_finite() {
        return None;
    }
    f.to_string().parse::<Decimal>().ok()
}

pub(crate) fn amount_to_f64(d: &Decimal) -> Option<f64> {
    d.to_string().parse::<f64>().ok()
}

mod amount_serde {
    use rust_decimal::Decimal;
    use serde::{de, ser, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Decimal, s: S) -> Result<S::Ok, S::Error> {
        let f = super::amount_to_f64(d).ok_or_else(|| {
            <S::Error as ser::Error>::custom(format!("amount {} is not representable", d))
        })?;
        s.serialize_f64(f)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Decimal, D::Error> {
        let f = f64::deserialize(d)?;
        super::amount_from_f64(f)
            .ok_or_else(|| de::Error::custom(format!("amount {} is out of range", f)))
    }
}

/// Raw form input for a new expense, before validation.
#[derive(Debug, Clone, Default)]
pub struct ExpenseDraft {
    pub date: String,
    pub category: String,
    pub amount: String,
    pub description: String,
}

impl ExpenseDraft {
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount: amount.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAggregate {
    pub category: Category,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub amount: Decimal,
}

/// Sum of amounts for a labelled period (day, ISO week or month).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodTotal {
    pub period: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}
