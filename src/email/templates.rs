/// Rendered notification for one contact submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactEmail {
    pub subject: String,
    pub body: String,
}

pub fn render_contact(name: &str, email: &str, message: &str) -> ContactEmail {
    ContactEmail {
        subject: format!("New message from {name}"),
        body: format!("Name: {name}\nEmail: {email}\nMessage: {message}"),
    }
}
