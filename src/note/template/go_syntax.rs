//! Go `text/template` actions, rewritten into minijinja syntax before compiling.
//!
//! Note templates written for the Go dialect look like
//! `{{ dateFormat "20060102" .Date }}__{{ makeSlug .Title }}.md`. Each such
//! action is rewritten into the equivalent minijinja expression
//! (`{{ dateFormat("20060102", Date) }}`) and the rest of the template is left
//! byte for byte as it was. Supported:
//!
//! - field access (`.Title`) and space-separated calls (`f "a" .Date`);
//! - pipelines, where the left value becomes the last argument (`.Title | makeSlug`);
//! - parenthesized sub-pipelines;
//! - `if` / `else if` / `else` / `end`, and `{{/* comments */}}`;
//! - the `not`, `and`, `or`, `eq`, `ne`, `lt`, `le`, `gt`, `ge` and `len` builtins;
//! - `{{-` and `-}}` trim markers.
//!
//! Actions that are not recognizably Go (`{{ Title }}`, `{{ makeSlug(Title) }}`,
//! `{{ x | upper }}`) pass through untouched, so minijinja templates keep working.
//! Go control words with no rewrite (`range`, `with`, `define`, ...) are a
//! syntax error. Anything else unrecognized is left for minijinja to judge.

use minijinja::{Error, ErrorKind};
use std::borrow::Cow;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Go control words that are rejected outright.
const UNSUPPORTED: &[&str] = &[
    "range", "with", "define", "template", "block", "break", "continue",
];

/// Words that make an action minijinja rather than a Go call chain.
const JINJA_KEYWORDS: &[&str] = &["if", "else", "and", "or", "not", "in", "is"];

/// Rewrites every Go action in `source`.
pub fn translate(source: &str) -> Result<Cow<'_, str>, Error> {
    if !source.contains(OPEN) {
        return Ok(Cow::Borrowed(source));
    }

    let mut out = String::with_capacity(source.len());
    let mut open_ifs = 0usize;
    let mut rest = source;
    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after = &rest[start + OPEN.len()..];
        let Some(len) = action_len(after) else {
            // Unterminated; minijinja reports it.
            out.push_str(&rest[start..]);
            return Ok(Cow::Owned(out));
        };
        let end = start + OPEN.len() + len + CLOSE.len();
        if let Some(word) = unsupported_word(&after[..len]) {
            return Err(Error::new(
                ErrorKind::SyntaxError,
                format!("Go template action '{}' is not supported", word),
            ));
        }
        match translate_action(&after[..len], &mut open_ifs) {
            Some(action) => out.push_str(&action),
            None => out.push_str(&rest[start..end]),
        }
        rest = &rest[end..];
    }
    out.push_str(rest);
    Ok(Cow::Owned(out))
}

fn unsupported_word(inner: &str) -> Option<&'static str> {
    let word = inner.trim_start_matches('-').split_whitespace().next()?;
    UNSUPPORTED.iter().find(|w| **w == word).copied()
}

/// Length of the action body up to its closing `}}`, skipping quoted text.
fn action_len(after: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for (i, c) in after.char_indices() {
        match quote {
            Some(q) => {
                if escaped {
                    escaped = false;
                } else if c == '\\' && q != '`' {
                    escaped = true;
                } else if c == q {
                    quote = None;
                }
            }
            None if matches!(c, '"' | '\'' | '`') => quote = Some(c),
            None if after[i..].starts_with(CLOSE) => return Some(i),
            None => {}
        }
    }
    None
}

fn translate_action(inner: &str, open_ifs: &mut usize) -> Option<String> {
    let (ltrim, body) = match inner.strip_prefix('-') {
        Some(b) if b.starts_with(char::is_whitespace) => ("-", b),
        _ => ("", inner),
    };
    let (rtrim, body) = match body.strip_suffix('-') {
        Some(b) if b.ends_with(char::is_whitespace) => ("-", b),
        _ => ("", body),
    };
    let body = body.trim();

    if let Some(comment) = body.strip_prefix("/*").and_then(|c| c.strip_suffix("*/")) {
        return Some(format!("{{#{}{}{}#}}", ltrim, comment, rtrim));
    }

    let tokens = tokenize(body)?;
    let statement = |s: &str| format!("{{%{} {} {}%}}", ltrim, s, rtrim);
    match tokens.as_slice() {
        [Token::Ident(kw), cond @ ..] if kw == "if" => {
            let cond = pipeline(cond)?;
            *open_ifs += 1;
            Some(statement(&format!("if {}", cond)))
        }
        [Token::Ident(kw)] if kw == "else" && *open_ifs > 0 => Some(statement("else")),
        [Token::Ident(kw), Token::Ident(kw2), cond @ ..]
            if kw == "else" && kw2 == "if" && *open_ifs > 0 =>
        {
            let cond = pipeline(cond)?;
            Some(statement(&format!("elif {}", cond)))
        }
        [Token::Ident(kw)] if kw == "end" && *open_ifs > 0 => {
            *open_ifs -= 1;
            Some(statement("endif"))
        }
        _ if is_go_flavored(&tokens) => {
            let expr = pipeline(&tokens)?;
            Some(format!("{{{{{} {} {}}}}}", ltrim, expr, rtrim))
        }
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Str(String),
    Number(String),
    Field(String),
    Dot,
    Ident(String),
    Pipe,
    Open,
    Close,
}

impl Token {
    fn is_operand(&self) -> bool {
        !matches!(self, Token::Pipe | Token::Open | Token::Close)
    }
}

fn is_go_flavored(tokens: &[Token]) -> bool {
    if tokens
        .iter()
        .any(|t| matches!(t, Token::Field(_) | Token::Dot))
    {
        return true;
    }
    let has_keyword = tokens
        .iter()
        .any(|t| matches!(t, Token::Ident(k) if JINJA_KEYWORDS.contains(&k.as_str())));
    !has_keyword
        && tokens
            .windows(2)
            .any(|w| w[0].is_operand() && w[1].is_operand())
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Consumes `Name(.Name)*` starting at `chars[*i]`.
fn take_path(chars: &[char], i: &mut usize) -> String {
    let mut path = String::new();
    loop {
        while *i < chars.len() && is_ident_char(chars[*i]) {
            path.push(chars[*i]);
            *i += 1;
        }
        let continues = *i + 1 < chars.len()
            && chars[*i] == '.'
            && is_ident_start(chars[*i + 1])
            && !path.is_empty();
        if !continues {
            return path;
        }
        path.push('.');
        *i += 1;
    }
}

fn tokenize(body: &str) -> Option<Vec<Token>> {
    let chars: Vec<char> = body.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match c {
            c if c.is_whitespace() => i += 1,
            '|' => {
                tokens.push(Token::Pipe);
                i += 1;
            }
            '(' => {
                tokens.push(Token::Open);
                i += 1;
            }
            ')' => {
                tokens.push(Token::Close);
                i += 1;
            }
            '"' => {
                let start = i;
                i += 1;
                while i < chars.len() && chars[i] != '"' {
                    if chars[i] == '\\' {
                        i += 1;
                    }
                    i += 1;
                }
                if i >= chars.len() {
                    return None;
                }
                i += 1;
                tokens.push(Token::Str(chars[start..i].iter().collect()));
            }
            '`' => {
                let start = i + 1;
                i += 1;
                while i < chars.len() && chars[i] != '`' {
                    i += 1;
                }
                if i >= chars.len() {
                    return None;
                }
                let raw: String = chars[start..i].iter().collect();
                i += 1;
                tokens.push(Token::Str(quote(&raw)));
            }
            '.' => {
                i += 1;
                let path = take_path(&chars, &mut i);
                tokens.push(if path.is_empty() {
                    Token::Dot
                } else {
                    Token::Field(path)
                });
            }
            c if c.is_ascii_digit()
                || (c == '-' && chars.get(i + 1).is_some_and(char::is_ascii_digit)) =>
            {
                let start = i;
                i += 1;
                while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '.') {
                    i += 1;
                }
                tokens.push(Token::Number(chars[start..i].iter().collect()));
            }
            c if is_ident_start(c) => tokens.push(Token::Ident(take_path(&chars, &mut i))),
            _ => return None,
        }
    }
    Some(tokens)
}

/// Turns a raw (backquoted) string into a double-quoted literal.
fn quote(raw: &str) -> String {
    let escaped = raw
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n");
    format!("\"{}\"", escaped)
}

fn pipeline(tokens: &[Token]) -> Option<String> {
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.pipeline()?;
    (parser.pos == tokens.len()).then_some(expr)
}

struct Operand {
    expr: String,
    /// Set when the operand is a bare name that can be called.
    callee: Option<String>,
}

struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn pipeline(&mut self) -> Option<String> {
        let mut value = self.command(None)?;
        while self.peek() == Some(&Token::Pipe) {
            self.pos += 1;
            value = self.command(Some(value))?;
        }
        Some(value)
    }

    fn command(&mut self, piped: Option<String>) -> Option<String> {
        let mut operands = Vec::new();
        while let Some(tok) = self.peek() {
            if matches!(tok, Token::Pipe | Token::Close) {
                break;
            }
            operands.push(self.operand()?);
        }
        match (operands.split_first(), piped) {
            (None, _) => None,
            (Some((only, [])), None) => Some(only.expr.clone()),
            (Some((func, args)), piped) => {
                let name = func.callee.as_deref()?;
                let mut args: Vec<String> = args.iter().map(|a| a.expr.clone()).collect();
                args.extend(piped);
                Some(call(name, &args))
            }
        }
    }

    fn operand(&mut self) -> Option<Operand> {
        let tok = self.peek()?.clone();
        self.pos += 1;
        let operand = match tok {
            Token::Str(s) | Token::Number(s) | Token::Field(s) => Operand {
                expr: s,
                callee: None,
            },
            Token::Ident(name) => Operand {
                expr: if name == "nil" { "none".to_string() } else { name.clone() },
                callee: (!name.contains('.')).then_some(name),
            },
            Token::Open => {
                let inner = self.pipeline()?;
                if self.peek() != Some(&Token::Close) {
                    return None;
                }
                self.pos += 1;
                Operand {
                    expr: format!("({})", inner),
                    callee: None,
                }
            }
            Token::Dot | Token::Pipe | Token::Close => return None,
        };
        Some(operand)
    }
}

/// A call in minijinja form; the Go builtins become operators.
fn call(name: &str, args: &[String]) -> String {
    let infix = |op: &str| format!("({})", args.join(&format!(" {} ", op)));
    match (name, args.len()) {
        ("not", 1) => format!("(not {})", args[0]),
        ("and", n) if n >= 2 => infix("and"),
        ("or", n) if n >= 2 => infix("or"),
        ("eq", 2) => infix("=="),
        ("ne", 2) => infix("!="),
        ("lt", 2) => infix("<"),
        ("le", 2) => infix("<="),
        ("gt", 2) => infix(">"),
        ("ge", 2) => infix(">="),
        ("len", 1) => format!("({} | length)", args[0]),
        _ => format!("{}({})", name, args.join(", ")),
    }
}
