//! Integration tests for URI attribute escaping.

use woodstock_markup::{Markup, MarkupError};

/// Helper to write a URI attribute and return only the escaped value.
fn uri_with(encoding: &str, input: &str) -> String {
    let mut markup = Markup::with_encoding(encoding);
    markup.start_element("a", None);
    markup.write_uri_attribute("href", input, Some("url")).unwrap();
    let rendered = markup.into_markup();
    rendered["<a href=\"".len()..rendered.len() - "\"/>".len()].to_string()
}

fn uri(input: &str) -> String {
    uri_with("ISO-8859-1", input)
}

#[test]
fn test_plain_path_is_unchanged() {
    assert_eq!(uri("/faces/index.jsp#top"), "/faces/index.jsp#top");
    assert_eq!(uri("http://example.com/a/b"), "http://example.com/a/b");
}

#[test]
fn test_space_and_quote() {
    assert_eq!(uri("/my page/\"x\""), "/my+page/%22x%22");
}

#[test]
fn test_percent_is_not_reencoded() {
    assert_eq!(uri("/a%20b/%E9"), "/a%20b/%E9");
}

#[test]
fn test_non_printable_and_latin1() {
    assert_eq!(uri("/\u{7F}/\u{E9}"), "/%7F/%E9");
}

#[test]
fn test_query_string_is_form_encoded() {
    assert_eq!(uri("a b?c=d e"), "a+b?c%3Dd+e");
    assert_eq!(uri("/p?x=1&y=a/b"), "/p?x%3D1%26y%3Da%2Fb");
}

#[test]
fn test_query_string_declared_encoding() {
    assert_eq!(uri("/p?q=\u{E9}"), "/p?q%3D%E9");
    assert_eq!(uri_with("UTF-8", "/p?q=\u{E9}"), "/p?q%3D%C3%A9");
}

#[test]
fn test_query_string_latin1_replacement() {
    assert_eq!(uri("/p?q=\u{20AC}"), "/p?q%3D%3F");
    assert_eq!(uri("/p?q=\u{80}"), "/p?q%3D%80");
    assert_eq!(uri("/p?q=\u{4E2D}"), "/p?q%3D%3F");
}

#[test]
fn test_query_string_unmappable_in_other_encoding() {
    assert_eq!(uri_with("Shift_JIS", "/p?q=\u{E9}"), "/p?q%3D%3F");
    assert_eq!(uri_with("Shift_JIS", "/p?q=\u{4E2D}"), "/p?q%3D%92%86");
}

#[test]
fn test_empty_query_string() {
    assert_eq!(uri("/p?"), "/p?");
}

#[test]
fn test_javascript_uses_attribute_escaping() {
    assert_eq!(uri("javascript:alert(1)"), "javascript:alert(1)");
    assert_eq!(
        uri("javascript:go(\"a b\") && x > 1"),
        "javascript:go(&quot;a b&quot;) &amp;&amp; x &gt; 1"
    );
}

#[test]
fn test_boolean_uri_value_is_text() {
    assert_eq!(
        {
            let mut markup = Markup::new();
            markup.start_element("a", None);
            markup.write_uri_attribute("href", true, None).unwrap();
            markup.into_markup()
        },
        r#"<a href="true"/>"#
    );
}

#[test]
fn test_unsupported_encoding() {
    let mut markup = Markup::with_encoding("x-no-such-charset");
    markup.start_element("a", None);

    // Without a query string the label is never needed.
    markup.write_uri_attribute("href", "/plain", None).unwrap();

    assert_eq!(
        markup.write_uri_attribute("src", "/p?q=1", None),
        Err(MarkupError::UnsupportedEncoding {
            label: "x-no-such-charset".to_string()
        })
    );
    assert_eq!(markup.markup(), r#"<a href="/plain"/>"#);
}
