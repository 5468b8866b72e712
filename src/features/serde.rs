use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Template;

/// A template serializes as its source string.
impl Serialize for Template<'_> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		self.source().serialize(serializer)
	}
}

/// A template borrows its source from the input.
///
/// Strings that the deserializer can not lend out, such as JSON strings with escape sequences, are rejected.
impl<'de: 'a, 'a> Deserialize<'de> for Template<'a> {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		<&'a str>::deserialize(deserializer).map(Template::new)
	}
}

#[cfg(test)]
#[rustfmt::skip]
mod test {
	use serde_test::{assert_de_tokens_error, assert_tokens, Token};

	use crate::Template;

	#[test]
	fn test_tokens() {
		let source = "Hello ${name}!";
		assert_tokens(&Template::new(source), &[Token::BorrowedStr(source)]);
	}

	#[test]
	fn test_owned_string_is_rejected() {
		assert_de_tokens_error::<Template>(
			&[Token::String("${name}")],
			"invalid type: string \"${name}\", expected a borrowed string",
		);
	}

	#[test]
	#[cfg(feature = "json")]
	fn test_borrowed_field() {
		use assert2::{assert, let_assert};

		#[derive(serde::Deserialize)]
		struct Greeting<'a> {
			#[serde(borrow)]
			text: Template<'a>,
			#[serde(borrow)]
			footer: Option<Template<'a>>,
		}

		let data = r#"{"text": "Hello ${name}, ${greeting}!", "footer": null}"#;
		let_assert!(Ok(parsed) = serde_json::from_str::<Greeting>(data));
		assert!(parsed.text.names().collect::<Vec<_>>() == ["name", "greeting"]);
		assert!(parsed.text.expand(&crate::from_fn(|name: &str| name.to_uppercase())) == "Hello NAME, GREETING!");
		assert!(parsed.footer.is_none());

		let_assert!(Err(_) = serde_json::from_str::<Greeting>(r#"{"text": "line\n${name}", "footer": null}"#));
	}
}
