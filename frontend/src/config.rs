/// Where the contact form is posted. formsubmit.co relays it by email, so no
/// server of our own is needed in any build.
pub fn contact_endpoint() -> &'static str {
    "https://formsubmit.co/ajax/contact@evogym.com"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_endpoint_is_hosted() {
        assert!(contact_endpoint().starts_with("https://formsubmit.co/ajax/"));
    }
}
