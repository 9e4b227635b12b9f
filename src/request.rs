use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateNote {
    pub content: String,
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNote {
    pub content: Option<String>,
    pub category: Option<String>,
}
