use serde::{Deserialize, Serialize};

/// Row of the `players` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Player {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub team: String,
    pub age: i64,
    pub active: bool,
}

/// Body of `POST /api/players`. Missing fields take their zero value and are
/// then rejected by [`NewPlayer::validate`]; `active` may be left out.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewPlayer {
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub team: String,
    pub age: i64,
    pub active: bool,
}

impl NewPlayer {
    /// An age of 0 counts as missing.
    pub fn validate(&self) -> Result<(), &'static str> {
        let missing = self.first_name.is_empty()
            || self.last_name.is_empty()
            || self.position.is_empty()
            || self.team.is_empty()
            || self.age == 0;

        if missing {
            Err("Missing required fields")
        } else {
            Ok(())
        }
    }

    pub fn into_player(self, id: i64) -> Player {
        Player {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            position: self.position,
            team: self.team,
            age: self.age,
            active: self.active,
        }
    }
}

/// Body of `PATCH /api/players/{id}`. A field that is absent or `null` is
/// left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePlayer {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
    pub team: Option<String>,
    pub age: Option<i64>,
    pub active: Option<bool>,
}

/// Columns a partial update is allowed to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerColumn {
    FirstName,
    LastName,
    Position,
    Team,
    Age,
    Active,
}

impl PlayerColumn {
    pub fn as_str(self) -> &'static str {
        match self {
            PlayerColumn::FirstName => "first_name",
            PlayerColumn::LastName => "last_name",
            PlayerColumn::Position => "position",
            PlayerColumn::Team => "team",
            PlayerColumn::Age => "age",
            PlayerColumn::Active => "active",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnValue {
    Text(String),
    Integer(i64),
    Bool(bool),
}

impl UpdatePlayer {
    /// The `(column, value)` pairs to write, in table column order.
    pub fn changes(self) -> Vec<(PlayerColumn, ColumnValue)> {
        let mut changes = Vec::new();

        if let Some(first_name) = self.first_name {
            changes.push((PlayerColumn::FirstName, ColumnValue::Text(first_name)));
        }
        if let Some(last_name) = self.last_name {
            changes.push((PlayerColumn::LastName, ColumnValue::Text(last_name)));
        }
        if let Some(position) = self.position {
            changes.push((PlayerColumn::Position, ColumnValue::Text(position)));
        }
        if let Some(team) = self.team {
            changes.push((PlayerColumn::Team, ColumnValue::Text(team)));
        }
        if let Some(age) = self.age {
            changes.push((PlayerColumn::Age, ColumnValue::Integer(age)));
        }
        if let Some(active) = self.active {
            changes.push((PlayerColumn::Active, ColumnValue::Bool(active)));
        }

        changes
    }
}
