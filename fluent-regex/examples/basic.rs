use fluent_regex::{CharGroup, IdentifierBoundary, NamedBlock, Patterns, RenderSettings};

fn main() -> fluent_regex::Result<()> {
    let p = Patterns::new();

    // Literals are escaped, `.` and `+` outside a class, `-` inside one
    let version = p
        .text("v1.0+")
        .char_group(CharGroup::new().range('a', 'z')?.char('-'))?
        .one_or_more()?;
    assert_eq!(version.to_pattern()?, r"v1\.0\+[a-z\-]+");

    // Sub-expressions can be built separately and reused
    let number = p.digit().one_or_more()?;
    let pair = p
        .start()
        .named_group("x", number)?
        .char(',')
        .white_space()
        .zero_or_more()?
        .named_group("y", number)?
        .end();
    assert_eq!(pair.to_pattern()?, r"^(?<x>\d+),\s*(?<y>\d+)$");

    let settings = RenderSettings::builder()
        .identifier_boundary(IdentifierBoundary::Apostrophe)
        .build();
    assert_eq!(pair.render(&settings)?, r"^(?'x'\d+),\s*(?'y'\d+)$");

    let greek = p.word(p.block(NamedBlock::Greek).one_or_more()?)?;
    println!("{}", greek.to_pattern()?);

    #[cfg(feature = "regex")]
    {
        let re = pair.to_regex(fluent_regex::RegexOptions::empty())?;
        let caps = re.captures("12, 34").expect("matches");
        println!("x = {}, y = {}", &caps["x"], &caps["y"]);
    }

    Ok(())
}
