use super::*;

#[test]
fn lines_of_numbers() -> Result<()> {
    let mut input = IStr::new(b"1 2 3\n\n4 5\n");

    assert_eq!(input.line::<Vec<u32>>()?, [1, 2, 3]);
    assert!(input.line::<Vec<u32>>()?.is_empty());
    assert_eq!(input.line::<Vec<u32>>()?, [4, 5]);
    assert!(input.try_line::<Vec<u32>>()?.is_none());
    assert!(input.line::<Vec<u32>>().is_err());
    Ok(())
}

#[test]
fn words_skip_whitespace() -> Result<()> {
    let mut input = IStr::new(b"  seeds:\n  79 -14\n");

    let W(label) = input.next::<W<&str>>()?;
    assert_eq!(label, "seeds:");
    assert_eq!(input.next::<(u64, i64)>()?, (79, -14));
    assert!(input.try_next::<u32>()?.is_none());
    Ok(())
}

#[test]
fn not_an_integer() {
    let mut input = IStr::new(b"12 ab");
    assert_eq!(input.next::<u32>().ok(), Some(12));

    let error = input.next::<u32>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::NotInteger("ab")));
    assert_eq!(Size::usize_range(error.span()), 3..5);
}

#[test]
fn split_line() -> Result<()> {
    let mut input = IStr::new(b"rn=1,cm-,qp=3\nnext\n");

    let Split(steps) = input.line::<Split<',', Vec<&str>>>()?;
    assert_eq!(steps, ["rn=1", "cm-", "qp=3"]);
    assert_eq!(input.line::<&str>()?, "next");
    Ok(())
}

#[test]
fn split_array_needs_every_element() -> Result<()> {
    let mut input = IStr::new(b"1,2\n");
    assert!(input.line::<Split<',', [u32; 3]>>().is_err());

    let mut input = IStr::new(b"1,2,3\n");
    let Split(array) = input.line::<Split<',', [u32; 3]>>()?;
    assert_eq!(array, [1, 2, 3]);
    Ok(())
}

#[test]
fn paragraphs() -> Result<()> {
    let mut input = IStr::new(b"\n\n#.#\n.#.\n\n\n\n##\n##\n");

    let blocks = input
        .paragraphs()
        .map(|p| p.as_bstr().to_string())
        .collect::<Vec<_>>();

    assert_eq!(blocks, ["#.#\n.#.", "##\n##\n"]);
    assert!(input.is_empty());
    Ok(())
}

#[test]
fn bytes_and_chars() -> Result<()> {
    let mut input = IStr::new(b"L7\xce\xbb");

    let B(b) = input.next::<B>()?;
    assert_eq!(b, b'L');
    assert_eq!(input.next::<char>()?, '7');
    assert_eq!(input.next::<char>()?, '\u{3bb}');
    assert!(input.try_next::<B>()?.is_none());
    Ok(())
}

#[test]
fn line_terminated_values() -> Result<()> {
    let mut input = IStr::new(b"Time: 7 15\nDistance: 9 40\n");

    let (W(_), Nl(times)) = input.next::<(W, Nl<Vec<u32>>)>()?;
    assert_eq!(times, [7, 15]);
    let (W(_), Nl(distances)) = input.next::<(W, Nl<Vec<u32>>)>()?;
    assert_eq!(distances, [9, 40]);
    Ok(())
}

#[test]
fn array_string_capacity() {
    let mut input = IStr::new(b"abcdef");
    let error = input.next::<ArrayString<3>>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::StringCapacity(3)));
}

#[test]
fn whitespace_counts_lines() -> Result<()> {
    let mut input = IStr::new(b" \n\n x");
    assert_eq!(input.ws()?, 2);
    assert_eq!(input.as_data(), b"x");
    Ok(())
}

#[test]
fn iterate_values() -> Result<()> {
    let mut input = IStr::new(b"3 4\n5");
    let values = input.iter::<u8>().collect::<Result<Vec<_>>>()?;
    assert_eq!(values, [3, 4, 5]);
    Ok(())
}
