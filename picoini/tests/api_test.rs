// SPDX-License-Identifier: Apache-2.0

// End-to-end tests of the public entry points

use picoini::{parse, IniParser, ParseError, Property, PropertyHandler, PushParseError, Value};

/// Records every property as owned strings.
#[derive(Default)]
struct Recorder {
    events: Recorded,
}

impl<'input> PropertyHandler<'input, ()> for Recorder {
    fn handle_property(
        &mut self,
        section: &'input str,
        key: &'input str,
        value: Value<'input>,
    ) -> Result<(), ()> {
        self.events.push((
            section.to_string(),
            key.to_string(),
            format!("{}:{}", value.type_name(), value),
        ));
        Ok(())
    }
}

type Recorded = Vec<(String, String, String)>;

fn record(input: &str) -> (Result<(), PushParseError<'_, ()>>, Recorded) {
    let mut recorder = Recorder::default();
    let result = parse(input, &mut recorder);
    (result, recorder.events)
}

#[test]
fn test_readme_example() {
    let input = "[foo]\nbar = 10 # comment\n\n[cheese]\nbaz=.3\nqux=-.75\n";
    let mut parser = IniParser::new(input);

    assert_eq!(
        parser.next_property(),
        Ok(Some(Property {
            section: "foo",
            key: "bar",
            value: Value::Number(10.0),
        }))
    );
    assert_eq!(
        parser.next_property(),
        Ok(Some(Property {
            section: "cheese",
            key: "baz",
            value: Value::Number(0.3),
        }))
    );
    assert_eq!(
        parser.next_property(),
        Ok(Some(Property {
            section: "cheese",
            key: "qux",
            value: Value::Number(-0.75),
        }))
    );
    assert_eq!(parser.next_property(), Ok(None));
}

#[test]
fn test_original_demo_document() {
    let input = concat!(
        "[foo]\n",
        "bar = 10 # This line has spaces and a comment\n",
        "\n",
        "[cheese]    \n",
        "foo      =      \"This is a string\"\n",
        "bar=true\n",
        "bar=TrUe\n",
        "bar=TRUE\n",
        "bar=false\n",
        "bar=FaLsE\n",
        "baz=10\n",
        "baz=.3\n",
        "qux=-.75\n",
        "baz=+100.0\n",
    );
    let (result, events) = record(input);
    assert_eq!(result, Ok(()));

    let expected = [
        ("foo", "bar", "double:10"),
        ("cheese", "foo", "string:This is a string"),
        ("cheese", "bar", "boolean:true"),
        ("cheese", "bar", "boolean:true"),
        ("cheese", "bar", "boolean:true"),
        ("cheese", "bar", "boolean:false"),
        ("cheese", "bar", "boolean:false"),
        ("cheese", "baz", "double:10"),
        ("cheese", "baz", "double:0.3"),
        ("cheese", "qux", "double:-0.75"),
        ("cheese", "baz", "double:100"),
    ];
    assert_eq!(events.len(), expected.len());
    for (event, (section, key, value)) in events.iter().zip(expected) {
        assert_eq!(event.0, section);
        assert_eq!(event.1, key);
        assert_eq!(event.2, value);
    }
}

#[test]
fn test_one_event_per_property_line() {
    let input = "[a]\nx = 1\ny = 2\n\n# comment line\n[b]\nz = 3\n[c]\n[d]\nw = \"q\"\n";
    let (result, events) = record(input);
    assert_eq!(result, Ok(()));
    let sections: Vec<&str> = events.iter().map(|e| e.0.as_str()).collect();
    assert_eq!(sections, ["a", "a", "b", "d"]);
}

#[test]
fn test_duplicate_keys_are_repeated_events() {
    let (result, events) = record("[a]\nk = 1\nk = 2\n[a]\nk = 3\n");
    assert_eq!(result, Ok(()));
    let values: Vec<&str> = events.iter().map(|e| e.2.as_str()).collect();
    assert_eq!(values, ["double:1", "double:2", "double:3"]);
}

#[test]
fn test_blank_sections_are_legal() {
    let (result, events) = record("[empty]\n\n[alsoempty]\n");
    assert_eq!(result, Ok(()));
    assert!(events.is_empty());
}

#[test]
fn test_comments_are_ignored() {
    let (result, events) = record("# header\n[s] # section comment\nbar = 10 # trailing\n");
    assert_eq!(result, Ok(()));
    assert_eq!(
        events,
        [("s".to_string(), "bar".to_string(), "double:10".to_string())]
    );
}

#[test]
fn test_bare_word_values() {
    let (result, events) = record("[server]\nhost = localhost\nmode = fast2\n");
    assert_eq!(result, Ok(()));
    let values: Vec<&str> = events.iter().map(|e| e.2.as_str()).collect();
    assert_eq!(values, ["string:localhost", "string:fast2"]);
}

#[test]
fn test_crlf_line_endings() {
    let (result, events) = record("[s]\r\na = 1\r\nb = \"x\"\r\n");
    assert_eq!(result, Ok(()));
    assert_eq!(events.len(), 2);
}

#[test]
fn test_values_borrow_from_input() {
    let input = String::from("[s]\nname = \"zero copy\"\n");
    let mut parser = IniParser::new(&input);
    let property = parser.next_property().unwrap().unwrap();
    let text = property.value.as_str().unwrap();
    let offset = text.as_ptr() as usize - input.as_ptr() as usize;
    assert_eq!(&input[offset..offset + text.len()], "zero copy");
}

#[test]
fn test_parse_bytes_rejects_invalid_utf8_value() {
    let input = b"[s]\nname = \"\xFF\"\n";
    let mut parser = IniParser::new_from_slice(input);
    assert!(matches!(
        parser.next_property(),
        Err(ParseError::InvalidUtf8(_))
    ));
}

#[test]
fn test_independent_parses_on_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let input = format!("[t{i}]\nvalue = {i}\n");
                let properties: Vec<(String, f64)> = IniParser::new(&input)
                    .map(|p| p.map(|p| (p.section.to_string(), p.value.as_f64().unwrap())))
                    .collect::<Result<_, _>>()
                    .unwrap();
                properties
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), [(format!("t{i}"), i as f64)]);
    }
}
