#[derive(Debug)]
pub struct SessionDTO {
    pub token: Option<String>,
}
