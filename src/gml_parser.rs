use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use color_eyre::eyre::{Result, eyre};
use regex::{Captures, Regex};

use crate::topology::{DeviceNode, Link, TopologyGraph};

/// Token types for GML parsing
#[derive(Debug, Clone, PartialEq)]
enum Token {
    Identifier(String),
    Number(String),
    String(String),
    LeftBracket,
    RightBracket,
    Eof,
}

/// Simple lexer for GML format
struct Lexer {
    input: Vec<char>,
    position: usize,
    current_char: Option<char>,
}

impl Lexer {
    fn new(input: &str) -> Self {
        let chars: Vec<char> = input.chars().collect();
        let current_char = chars.first().copied();
        Self {
            input: chars,
            position: 0,
            current_char,
        }
    }

    fn advance(&mut self) {
        self.position += 1;
        self.current_char = self.input.get(self.position).copied();
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn skip_comment(&mut self) {
        while let Some(ch) = self.current_char {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn read_string(&mut self) -> Result<String> {
        let mut result = String::new();
        self.advance(); // opening quote

        while let Some(ch) = self.current_char {
            match ch {
                '"' => {
                    self.advance();
                    return Ok(decode_entities(&result));
                }
                '\\' => {
                    self.advance();
                    if let Some(escaped) = self.current_char {
                        match escaped {
                            'n' => result.push('\n'),
                            't' => result.push('\t'),
                            'r' => result.push('\r'),
                            '\\' => result.push('\\'),
                            '"' => result.push('"'),
                            _ => {
                                result.push('\\');
                                result.push(escaped);
                            }
                        }
                        self.advance();
                    }
                }
                _ => {
                    result.push(ch);
                    self.advance();
                }
            }
        }

        Err(eyre!("Unterminated string literal"))
    }

    fn read_word(&mut self) -> String {
        let mut result = String::new();

        while let Some(ch) = self.current_char {
            if ch.is_alphanumeric() || matches!(ch, '_' | '.' | '-' | '+') {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        result
    }

    fn next_token(&mut self) -> Result<Token> {
        loop {
            self.skip_whitespace();

            match self.current_char {
                None => return Ok(Token::Eof),
                Some('#') => {
                    self.skip_comment();
                    continue;
                }
                Some('[') => {
                    self.advance();
                    return Ok(Token::LeftBracket);
                }
                Some(']') => {
                    self.advance();
                    return Ok(Token::RightBracket);
                }
                Some('"') => return Ok(Token::String(self.read_string()?)),
                Some(ch) if ch.is_alphabetic() || ch == '_' => {
                    return Ok(Token::Identifier(self.read_word()));
                }
                Some(ch) if ch.is_numeric() || ch == '-' || ch == '+' || ch == '.' => {
                    return Ok(Token::Number(self.read_word()));
                }
                Some(ch) => return Err(eyre!("Unexpected character: '{}'", ch)),
            }
        }
    }
}

/// Recursive-descent parser over the token stream
struct Parser {
    lexer: Lexer,
    current_token: Token,
}

/// Result of reading one `key value` pair inside a list
enum Entry {
    Scalar(String, String),
    List(String),
}

impl Parser {
    fn new(mut lexer: Lexer) -> Result<Self> {
        let current_token = lexer.next_token()?;
        Ok(Self { lexer, current_token })
    }

    fn advance(&mut self) -> Result<()> {
        self.current_token = self.lexer.next_token()?;
        Ok(())
    }

    fn expect_identifier(&mut self, expected: &str) -> Result<()> {
        match &self.current_token {
            Token::Identifier(id) if id == expected => self.advance(),
            _ => Err(eyre!("Expected identifier '{}', found {:?}", expected, self.current_token)),
        }
    }

    fn expect_left_bracket(&mut self) -> Result<()> {
        match self.current_token {
            Token::LeftBracket => self.advance(),
            _ => Err(eyre!("Expected '[', found {:?}", self.current_token)),
        }
    }

    fn expect_right_bracket(&mut self) -> Result<()> {
        match self.current_token {
            Token::RightBracket => self.advance(),
            _ => Err(eyre!("Expected ']', found {:?}", self.current_token)),
        }
    }

    /// Skip a bracketed list whose opening '[' is the current token
    fn skip_list(&mut self) -> Result<()> {
        self.expect_left_bracket()?;
        let mut depth = 1usize;
        while depth > 0 {
            match self.current_token {
                Token::LeftBracket => depth += 1,
                Token::RightBracket => depth -= 1,
                Token::Eof => return Err(eyre!("Unterminated list")),
                _ => {}
            }
            self.advance()?;
        }
        Ok(())
    }

    fn parse_entry(&mut self, context: &str) -> Result<Entry> {
        let key = match &self.current_token {
            Token::Identifier(key) => key.clone(),
            _ => return Err(eyre!("Expected attribute name in {}, found {:?}", context, self.current_token)),
        };
        self.advance()?;

        match &self.current_token {
            Token::Identifier(val) | Token::Number(val) | Token::String(val) => {
                let value = val.clone();
                self.advance()?;
                Ok(Entry::Scalar(key, value))
            }
            Token::LeftBracket => {
                self.skip_list()?;
                Ok(Entry::List(key))
            }
            _ => Err(eyre!("Expected value for '{}', found {:?}", key, self.current_token)),
        }
    }

    fn parse_node(&mut self) -> Result<DeviceNode> {
        self.expect_identifier("node")?;
        self.expect_left_bracket()?;

        let mut id = None;
        let mut attributes = BTreeMap::new();

        while self.current_token != Token::RightBracket {
            match self.parse_entry("node")? {
                Entry::Scalar(key, value) if key == "id" => id = Some(value),
                Entry::Scalar(key, value) => {
                    attributes.insert(key, value);
                }
                Entry::List(key) => log::debug!("Skipping nested '{}' list in node", key),
            }
        }

        self.expect_right_bracket()?;

        let id = id.ok_or_else(|| eyre!("Node missing required 'id' attribute"))?;
        Ok(DeviceNode { id, attributes })
    }

    fn parse_edge(&mut self) -> Result<Link> {
        self.expect_identifier("edge")?;
        self.expect_left_bracket()?;

        let mut source = None;
        let mut target = None;
        let mut attributes = BTreeMap::new();

        while self.current_token != Token::RightBracket {
            match self.parse_entry("edge")? {
                Entry::Scalar(key, value) => match key.as_str() {
                    "source" => source = Some(value),
                    "target" => target = Some(value),
                    _ => {
                        attributes.insert(key, value);
                    }
                },
                Entry::List(key) => log::debug!("Skipping nested '{}' list in edge", key),
            }
        }

        self.expect_right_bracket()?;

        let source = source.ok_or_else(|| eyre!("Edge missing required 'source' attribute"))?;
        let target = target.ok_or_else(|| eyre!("Edge missing required 'target' attribute"))?;

        // Topology exports often carry "bandwidth 10Gbit" instead of a plain Mbps figure
        if !attributes.contains_key("bandwidth_mbps") {
            if let Some(mbps) = attributes.get("bandwidth").and_then(|bw| bandwidth_to_mbps(bw)) {
                attributes.insert("bandwidth_mbps".to_string(), format!("{}", mbps));
            }
        }

        Ok(Link { source, target, attributes })
    }

    /// Skip top-level entries such as `Creator "yFiles"` up to the `graph` key
    fn skip_header(&mut self) -> Result<()> {
        loop {
            match &self.current_token {
                Token::Identifier(keyword) if keyword == "graph" => return Ok(()),
                Token::Identifier(_) => match self.parse_entry("header")? {
                    Entry::Scalar(key, value) => log::debug!("Ignoring GML header {} = {}", key, value),
                    Entry::List(key) => log::debug!("Skipping top-level '{}' list", key),
                },
                _ => return Err(eyre!("Expected 'graph', found {:?}", self.current_token)),
            }
        }
    }

    fn parse_graph(&mut self) -> Result<TopologyGraph> {
        self.skip_header()?;
        self.expect_identifier("graph")?;
        self.expect_left_bracket()?;

        let mut graph = TopologyGraph::default();

        while self.current_token != Token::RightBracket {
            match &self.current_token {
                Token::Identifier(keyword) if keyword == "node" => graph.nodes.push(self.parse_node()?),
                Token::Identifier(keyword) if keyword == "edge" => graph.links.push(self.parse_edge()?),
                Token::Identifier(_) => match self.parse_entry("graph")? {
                    Entry::Scalar(key, value) => {
                        graph.attributes.insert(key, value);
                    }
                    Entry::List(key) => log::debug!("Skipping nested '{}' list in graph", key),
                },
                _ => return Err(eyre!("Expected keyword in graph, found {:?}", self.current_token)),
            }
        }

        self.expect_right_bracket()?;

        graph.directed = graph.attributes.get("directed").map_or(false, |d| d.trim() == "1");
        Ok(graph)
    }
}

/// Decode the character references GML writers use inside strings
/// (`&#233;`, `&#x2194;`, `&quot;`). Unknown or invalid references are kept.
fn decode_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }

    static ENTITY: OnceLock<Regex> = OnceLock::new();
    let entity = ENTITY.get_or_init(|| {
        Regex::new(r"&(?:#([0-9]+)|#[xX]([0-9a-fA-F]+)|(quot|amp|lt|gt|apos));").expect("valid entity regex")
    });

    entity
        .replace_all(raw, |caps: &Captures| {
            let decoded = if let Some(dec) = caps.get(1) {
                dec.as_str().parse::<u32>().ok().and_then(char::from_u32)
            } else if let Some(hex) = caps.get(2) {
                u32::from_str_radix(hex.as_str(), 16).ok().and_then(char::from_u32)
            } else {
                match caps.get(3).map(|m| m.as_str()) {
                    Some("quot") => Some('"'),
                    Some("amp") => Some('&'),
                    Some("lt") => Some('<'),
                    Some("gt") => Some('>'),
                    Some("apos") => Some('\''),
                    _ => None,
                }
            };
            decoded.map_or_else(|| caps[0].to_string(), |c| c.to_string())
        })
        .into_owned()
}

/// Convert a bandwidth string such as "10Gbit", "100Mbit" or "1000" to Mbps
fn bandwidth_to_mbps(value: &str) -> Option<f64> {
    let value = value.trim();
    if let Some(gbit) = value.strip_suffix("Gbit") {
        gbit.trim().parse::<f64>().ok().map(|g| g * 1000.0)
    } else if let Some(mbit) = value.strip_suffix("Mbit") {
        mbit.trim().parse::<f64>().ok()
    } else if let Some(kbit) = value.strip_suffix("Kbit") {
        kbit.trim().parse::<f64>().ok().map(|k| k / 1000.0)
    } else {
        value.parse::<f64>().ok()
    }
}

/// Parse GML text into a topology graph
pub fn parse_gml_str(content: &str) -> Result<TopologyGraph> {
    let lexer = Lexer::new(content);
    let mut parser = Parser::new(lexer)?;
    parser.parse_graph()
}

/// Parse a GML file into a topology graph
pub fn parse_gml_file(path: &Path) -> Result<TopologyGraph> {
    let content = fs::read_to_string(path)
        .map_err(|e| eyre!("Failed to read GML file '{}': {}", path.display(), e))?;

    parse_gml_str(&content)
}
