use pretty_assertions::assert_eq;
use sitemark::{
    block_to_block_type, markdown_to_blocks, text_to_spans, BlockType, MarkdownService,
    SitemarkError, TextSpan,
};

const DOCUMENT: &str = "# Tolkien Fan Club

![JRR Tolkien sitting](/images/tolkien.png)

Here's the deal, **I like Tolkien**.

> \"I am in fact a Hobbit in all but size.\"
>
> -- J.R.R. Tolkien

## Reasons I like Tolkien

* You can spend years studying the legendarium and still not understand its depths
* It can be enjoyed by children and adults alike
- Disney *didn't ruin it*

## My favorite characters (in order)

1. Gandalf
2. Bilbo
3. Sam

Here's what `elflang` looks like (the perfect coding language):

```
func main(){
    fmt.Println(\"Aiya, Ambar!\")
}
```

Want to get in touch? [Contact me here](/contact).
";

#[test]
fn test_full_document() {
    let service = MarkdownService::new();
    let html = service.to_html(DOCUMENT).unwrap();

    let expected = concat!(
        "<div>",
        "<h1>Tolkien Fan Club</h1>",
        "<p><img src=\"/images/tolkien.png\" alt=\"JRR Tolkien sitting\"></img></p>",
        "<p>Here's the deal, <b>I like Tolkien</b>.</p>",
        "<blockquote>\"I am in fact a Hobbit in all but size.\"\n>\n> -- J.R.R. Tolkien</blockquote>",
        "<h2>Reasons I like Tolkien</h2>",
        "<ul>",
        "<li>You can spend years studying the legendarium and still not understand its depths</li>",
        "<li>It can be enjoyed by children and adults alike</li>",
        "<li>Disney <i>didn't ruin it</i></li>",
        "</ul>",
        "<h2>My favorite characters (in order)</h2>",
        "<ol><li>Gandalf</li><li>Bilbo</li><li>Sam</li></ol>",
        "<p>Here's what <code>elflang</code> looks like (the perfect coding language):</p>",
        "<pre><code>func main(){\n    fmt.Println(\"Aiya, Ambar!\")\n}</code></pre>",
        "<p>Want to get in touch? <a href=\"/contact\">Contact me here</a>.</p>",
        "</div>",
    );
    assert_eq!(html, expected);
    assert_eq!(service.extract_title(DOCUMENT).unwrap(), "Tolkien Fan Club");
}

#[test]
fn test_title_then_paragraph() {
    let markdown = "# Title\n\nHello **world**";
    assert_eq!(markdown_to_blocks(markdown), vec!["# Title", "Hello **world**"]);
    assert_eq!(
        MarkdownService::new().to_html(markdown).unwrap(),
        "<div><h1>Title</h1><p>Hello <b>world</b></p></div>"
    );
}

#[test]
fn test_boundary_classifications() {
    assert_eq!(block_to_block_type("####### heading"), BlockType::Paragraph);
    assert_eq!(block_to_block_type("1. a\n3. b"), BlockType::Paragraph);
}

#[test]
fn test_malformed_blocks_render_as_paragraphs() {
    let service = MarkdownService::new();
    assert_eq!(
        service.to_html("####### heading\n\n1. a\n3. b").unwrap(),
        "<div><p>####### heading</p><p>1. a\n3. b</p></div>"
    );
}

#[test]
fn test_image_span_scenario() {
    assert_eq!(
        text_to_spans("a ![x](u) b"),
        vec![
            TextSpan::plain("a "),
            TextSpan::image("x", "u"),
            TextSpan::plain(" b"),
        ]
    );
}

#[test]
fn test_unterminated_delimiters_render_literally() {
    let service = MarkdownService::new();
    assert_eq!(
        service.to_html("a `b and c").unwrap(),
        "<div><p>a `b and c</p></div>"
    );
}

#[test]
fn test_page_without_title() {
    let service = MarkdownService::new();
    assert!(matches!(
        service.render_page("## not a title", "{{ Title }}"),
        Err(SitemarkError::NoTitleFound)
    ));
}
