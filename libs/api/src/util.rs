/// Content type from the uploaded filename; uploads are metadata plus
/// bytes, so there is no header to trust.
pub(crate) fn guess_content_type(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_guess_content_type() {
        assert_eq!(guess_content_type("weekly.pdf"), "application/pdf");
        assert_eq!(guess_content_type("easter.JPG"), "image/jpeg");
        assert_eq!(guess_content_type("easter.webp"), "image/webp");
        assert_eq!(
            guess_content_type("no-extension"),
            "application/octet-stream"
        );
    }
}
