//! Column names of the passenger roster schema.
//!
//! The table's column set is discovered from the loaded file; these names
//! only drive the validation rules and the cleaning pipeline, which apply
//! themselves to whichever of the columns the file actually has.

pub const PASSENGER_ID: &str = "PassengerId";
pub const SURVIVED: &str = "Survived";
pub const PCLASS: &str = "Pclass";
pub const NAME: &str = "Name";
pub const SEX: &str = "Sex";
pub const AGE: &str = "Age";
pub const SIBSP: &str = "SibSp";
pub const PARCH: &str = "Parch";
pub const TICKET: &str = "Ticket";
pub const FARE: &str = "Fare";
pub const CABIN: &str = "Cabin";
pub const EMBARKED: &str = "Embarked";
