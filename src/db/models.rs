#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalStation {
    pub id: String,
    pub code: String,
    pub name: String,
}
