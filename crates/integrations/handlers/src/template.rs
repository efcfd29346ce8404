use macro_engine::HandlerError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Text(String),
    Slot(usize),
}

/// Command text with `{}` or `{N}` placeholders for captured runs.
/// `{{` and `}}` stand for literal braces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    pieces: Vec<Piece>,
}

impl Template {
    pub fn parse(source: &str) -> Result<Self, HandlerError> {
        let mut pieces = Vec::new();
        let mut text = String::new();
        let mut next_auto = 0;
        let mut numbering: Option<bool> = None;
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    text.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    text.push('}');
                }
                '}' => {
                    return Err(template_error(source, "single '}' encountered"));
                }
                '{' => {
                    let mut field = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(c) => field.push(c),
                            None => return Err(template_error(source, "unclosed '{'")),
                        }
                    }

                    let automatic = field.is_empty();
                    if *numbering.get_or_insert(automatic) != automatic {
                        return Err(template_error(
                            source,
                            "cannot mix automatic and manual field numbering",
                        ));
                    }

                    let index = if automatic {
                        next_auto += 1;
                        next_auto - 1
                    } else {
                        field.parse::<usize>().map_err(|_| {
                            template_error(source, &format!("invalid field {{{}}}", field))
                        })?
                    };

                    if !text.is_empty() {
                        pieces.push(Piece::Text(std::mem::take(&mut text)));
                    }
                    pieces.push(Piece::Slot(index));
                }
                _ => text.push(c),
            }
        }

        if !text.is_empty() {
            pieces.push(Piece::Text(text));
        }

        Ok(Self {
            source: source.to_string(),
            pieces,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn fill(&self, captures: &[String]) -> Result<String, HandlerError> {
        let mut out = String::with_capacity(self.source.len());

        for piece in &self.pieces {
            match piece {
                Piece::Text(text) => out.push_str(text),
                Piece::Slot(index) => {
                    let value = captures.get(*index).ok_or_else(|| {
                        template_error(
                            &self.source,
                            &format!(
                                "placeholder {} but only {} captures",
                                index,
                                captures.len()
                            ),
                        )
                    })?;
                    out.push_str(value);
                }
            }
        }

        Ok(out)
    }
}

fn template_error(source: &str, reason: &str) -> HandlerError {
    HandlerError::Template(format!("{} in {:?}", reason, source))
}
