#[derive(Debug, Clone)]
pub struct IdDTO {
    pub id: i64,
}
