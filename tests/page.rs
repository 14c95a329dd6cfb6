use metascrape::{ItemProp, ItemScope, Meta, Page};
use pretty_assertions::assert_eq;

// sampled from https://schema.org/docs/gs.html and http://ogp.me/
const TEST_PAGE: &str = r#"
    <html>
        <head>
            <title>TestPage</title>
            <meta property="og:title" content="The Rock" />
            <meta property="og:type" content="video.movie" />
            <meta property="og:url" content="http://www.imdb.com/title/tt0117500/" />
            <meta property="og:image" content="http://example.com/rock.jpg" />
            <meta property="og:image:width" content="300" />
            <meta property="og:image:height" content="300" />
            <meta property="og:image" content="http://example.com/rock2.jpg" />
            <meta property="og:image" content="http://example.com/rock3.jpg" />
            <meta property="og:image:height" content="1000" />
            <meta name="keywords" content="a,b,c" />
            <meta name="unusual">special</meta>
            <script>var ignored = "<b>nope</b>";</script>
        </head>
        <body>
            <div itemscope itemtype="http://schema.org/Offer">
                <span itemprop="name">Blend-O-Matic</span>
                <span itemprop="price">$19.95</span>
                <div itemprop="reviews" itemscope itemtype="http://schema.org/AggregateRating">
                    <img src="four-stars.jpg" />
                    <meta itemprop="ratingValue" content="4" />
                    <meta itemprop="bestRating" content="5" />
                    Based on <span itemprop="ratingCount">25</span> user ratings
                </div>
            </div>
            <script>
                document.write("this is not text");
            </script>
            <div itemscope itemtype="http://schema.org/Event">
                <div itemprop="name">Spinal Tap</div>
                <span itemprop="description">One of the loudest bands ever reunites for an unforgettable two-day show.</span>
                Event date:
                <time itemprop="startDate" datetime="2011-05-08T19:30">May 8, 7:30pm</time>
            </div>
            <div itemscope itemtype="http://schema.org/Person">
              <a href="alice.html" itemprop="url">Alice Jones</a>
            </div>
            <div itemscope itemtype="http://schema.org/Person">
              <a href="bob.html" itemprop="url">Bob Smith</a>
            </div>
        </body>
    </html>
"#;

fn meta(property: &str, content: &str) -> Meta {
    Meta {
        property: property.to_owned(),
        content: content.to_owned(),
        ..Meta::default()
    }
}

fn named(name: &str, content: &str) -> Meta {
    Meta {
        name: name.to_owned(),
        content: content.to_owned(),
        ..Meta::default()
    }
}

fn prop(tag_name: &str, item_prop: &str, content: &str) -> ItemProp {
    ItemProp {
        tag_name: tag_name.to_owned(),
        item_prop: item_prop.to_owned(),
        content: content.to_owned(),
        ..ItemProp::default()
    }
}

fn scope(item_type: &str, props: Vec<ItemProp>) -> ItemScope {
    ItemScope {
        tag_name: "div".to_owned(),
        item_type: item_type.to_owned(),
        props,
        ..ItemScope::default()
    }
}

#[test]
fn title_and_text() {
    let page = Page::parse(TEST_PAGE);
    assert_eq!(page.title, "TestPage");
    assert_eq!(
        page.text,
        "Blend-O-Matic $19.95 Based on 25 user ratings Spinal Tap One of the loudest bands ever \
         reunites for an unforgettable two-day show. Event date: May 8, 7:30pm Alice Jones Bob Smith"
    );
}

#[test]
fn metadata() {
    let page = Page::parse(TEST_PAGE);
    assert_eq!(
        page.metadata(),
        &[
            meta("og:title", "The Rock"),
            meta("og:type", "video.movie"),
            meta("og:url", "http://www.imdb.com/title/tt0117500/"),
            Meta {
                extra: vec![
                    meta("og:image:width", "300"),
                    meta("og:image:height", "300"),
                ],
                ..meta("og:image", "http://example.com/rock.jpg")
            },
            meta("og:image", "http://example.com/rock2.jpg"),
            Meta {
                extra: vec![meta("og:image:height", "1000")],
                ..meta("og:image", "http://example.com/rock3.jpg")
            },
            named("keywords", "a,b,c"),
            named("unusual", "special"),
        ][..]
    );

    for item in page.metadata() {
        for extra in &item.extra {
            assert!(extra.extra.is_empty());
        }
    }
}

#[test]
fn microdata() {
    let page = Page::parse(TEST_PAGE);

    let offer = ItemScope {
        children: vec![ItemScope {
            item_prop: "reviews".to_owned(),
            ..scope(
                "http://schema.org/AggregateRating",
                vec![
                    prop("meta", "ratingValue", "4"),
                    prop("meta", "bestRating", "5"),
                    prop("span", "ratingCount", "25"),
                ],
            )
        }],
        ..scope(
            "http://schema.org/Offer",
            vec![
                prop("span", "name", "Blend-O-Matic"),
                prop("span", "price", "$19.95"),
            ],
        )
    };

    let event = scope(
        "http://schema.org/Event",
        vec![
            prop("div", "name", "Spinal Tap"),
            prop(
                "span",
                "description",
                "One of the loudest bands ever reunites for an unforgettable two-day show.",
            ),
            ItemProp {
                date_time: "2011-05-08T19:30".to_owned(),
                ..prop("time", "startDate", "May 8, 7:30pm")
            },
        ],
    );

    let person = |href: &str, name: &str| {
        scope(
            "http://schema.org/Person",
            vec![ItemProp {
                href: href.to_owned(),
                ..prop("a", "url", name)
            }],
        )
    };

    assert_eq!(
        page.microdata,
        vec![
            offer,
            event,
            person("alice.html", "Alice Jones"),
            person("bob.html", "Bob Smith"),
        ]
    );
}

#[test]
fn read_matches_parse() {
    let page = Page::read(TEST_PAGE.as_bytes()).unwrap();
    assert_eq!(page, Page::parse(TEST_PAGE));
}

#[test]
fn head_microdata_is_ignored() {
    let page = Page::parse(
        r#"<html><head><meta itemscope itemtype="InHead"><link itemprop="x" href="y"></head>
        <body><p itemscope itemtype="InBody"></p></body></html>"#,
    );
    assert_eq!(page.microdata.len(), 1);
    assert_eq!(page.microdata[0].item_type, "InBody");
    assert_eq!(page.microdata[0].tag_name, "p");
}

#[test]
fn deeply_nested_scopes_keep_order() {
    let page = Page::parse(
        r#"<body>
        <section itemscope itemtype="A">
            <div itemscope itemprop="first" itemtype="B">
                <div itemscope itemprop="inner" itemtype="C"><b itemprop="leaf">x</b></div>
            </div>
            <div><div itemscope itemprop="second" itemtype="D"></div></div>
        </section>
        </body>"#,
    );

    let a = &page.microdata[0];
    let names: Vec<_> = a.children.iter().map(|c| c.item_prop.as_str()).collect();
    assert_eq!(names, vec!["first", "second"]);
    let c = &a.children[0].children[0];
    assert_eq!(c.item_type, "C");
    assert_eq!(c.props, vec![prop("b", "leaf", "x")]);
}

#[test]
fn serializes_to_json() {
    let page = Page::parse(TEST_PAGE);
    let json = serde_json::to_value(&page).unwrap();
    assert_eq!(json["title"], "TestPage");
    assert_eq!(json["metadata"][3]["extra"][0]["property"], "og:image:width");
    assert_eq!(json["microdata"][0]["children"][0]["itemProp"], "reviews");
    assert_eq!(json["microdata"][1]["props"][2]["dateTime"], "2011-05-08T19:30");
    assert!(json.get("url").is_none());

    let back: Page = serde_json::from_value(json).unwrap();
    assert_eq!(back, page);
}
