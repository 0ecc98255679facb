//! Quoted terms
//!
//! [`Term`] models the Erlang terms `Code.string_to_quoted/1` returns: atoms,
//! integers, floats, binaries, lists and tuples. Lists of small integers are
//! charlists; [`Term::CodePointList`] keeps them compact but compares equal
//! to the corresponding [`Term::List`] of integers.

mod display;


use num_bigint::BigInt;
use num_traits::ToPrimitive;

/// An Erlang term in the shape the Elixir compiler produces
#[derive(Debug, Clone)]
pub enum Term {
    /// Integer that fits in 64 bits
    Integer(i64),
    /// Integer of arbitrary size
    BigInteger(BigInt),
    Float(f64),
    /// Atom by name (`nil`, `true` and `false` are atoms too)
    Atom(String),
    /// UTF-8 binary
    Binary(String),
    /// Charlist: a list of code points
    CodePointList(Vec<u32>),
    List(Vec<Term>),
    Tuple(Vec<Term>),
}

impl Term {
    pub fn atom(name: impl Into<String>) -> Self {
        Term::Atom(name.into())
    }

    pub fn binary(text: impl Into<String>) -> Self {
        Term::Binary(text.into())
    }

    pub fn nil() -> Self {
        Term::atom("nil")
    }

    pub fn list(elements: Vec<Term>) -> Self {
        Term::List(elements)
    }

    pub fn tuple(elements: Vec<Term>) -> Self {
        Term::Tuple(elements)
    }

    pub fn integer(value: i64) -> Self {
        Term::Integer(value)
    }

    /// Integer term, narrowed to [`Term::Integer`] when it fits
    pub fn integer_from_big(value: BigInt) -> Self {
        match value.to_i64() {
            Some(small) => Term::Integer(small),
            None => Term::BigInteger(value),
        }
    }

    /// Charlist term
    ///
    /// Latin-1 code points keep the compact [`Term::CodePointList`] form;
    /// anything wider, and the empty list, becomes a plain integer list.
    pub fn charlist(code_points: Vec<u32>) -> Self {
        if !code_points.is_empty() && code_points.iter().all(|&c| c <= 0xFF) {
            Term::CodePointList(code_points)
        } else {
            Term::List(
                code_points
                    .into_iter()
                    .map(|c| Term::Integer(i64::from(c)))
                    .collect(),
            )
        }
    }

    /// `{name, metadata, arguments}`
    ///
    /// An empty argument list quotes as `nil`, the way variables and
    /// argument-less forms do.
    pub fn call(name: Term, metadata: Term, arguments: Vec<Term>) -> Self {
        let arguments = if arguments.is_empty() {
            Term::nil()
        } else {
            Term::List(arguments)
        };
        Term::Tuple(vec![name, metadata, arguments])
    }

    /// `{{:., metadata, [module, function]}, metadata, arguments}`
    pub fn remote_call(
        module: Term,
        function: &str,
        metadata: Term,
        arguments: Vec<Term>,
    ) -> Self {
        let dot = Term::Tuple(vec![
            Term::atom("."),
            metadata.clone(),
            Term::List(vec![module, Term::atom(function)]),
        ]);
        Term::Tuple(vec![dot, metadata, Term::List(arguments)])
    }

    /// Keyword list `[key: value, ...]`
    pub fn keyword<'k>(pairs: impl IntoIterator<Item = (&'k str, Term)>) -> Self {
        Term::List(
            pairs
                .into_iter()
                .map(|(key, value)| Term::Tuple(vec![Term::atom(key), value]))
                .collect(),
        )
    }

    pub fn as_atom(&self) -> Option<&str> {
        match self {
            Term::Atom(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_binary(&self) -> Option<&str> {
        match self {
            Term::Binary(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&[Term]> {
        match self {
            Term::Tuple(elements) => Some(elements),
            _ => None,
        }
    }

    /// Elements of a list; charlists are expanded to integer terms
    pub fn as_list(&self) -> Option<Vec<Term>> {
        match self {
            Term::List(elements) => Some(elements.clone()),
            Term::CodePointList(code_points) => Some(
                code_points
                    .iter()
                    .map(|&c| Term::Integer(i64::from(c)))
                    .collect(),
            ),
            _ => None,
        }
    }

    pub fn is_nil(&self) -> bool {
        self.as_atom() == Some("nil")
    }

    /// Whether this is a `{name, metadata, arguments}` tuple with atom `name`
    pub fn is_call_to(&self, name: &str) -> bool {
        match self.as_tuple() {
            Some([head, _, _]) => head.as_atom() == Some(name),
            _ => false,
        }
    }

    /// Code points of a list made only of non-negative integers below 0x110000
    fn code_points(&self) -> Option<Vec<u32>> {
        match self {
            Term::CodePointList(code_points) => Some(code_points.clone()),
            Term::List(elements) => elements
                .iter()
                .map(|element| match element {
                    Term::Integer(value) => u32::try_from(*value).ok(),
                    _ => None,
                })
                .collect(),
            _ => None,
        }
    }
}

impl PartialEq for Term {
    /// Erlang term equality: integers of either representation compare by
    /// value and a charlist equals the list of its integers.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Term::Integer(a), Term::Integer(b)) => a == b,
            (Term::BigInteger(a), Term::BigInteger(b)) => a == b,
            (Term::Integer(a), Term::BigInteger(b)) | (Term::BigInteger(b), Term::Integer(a)) => {
                BigInt::from(*a) == *b
            }
            (Term::Float(a), Term::Float(b)) => a.to_bits() == b.to_bits(),
            (Term::Atom(a), Term::Atom(b)) => a == b,
            (Term::Binary(a), Term::Binary(b)) => a == b,
            (Term::CodePointList(a), Term::CodePointList(b)) => a == b,
            (Term::List(a), Term::List(b)) => a == b,
            (Term::CodePointList(_), Term::List(_)) | (Term::List(_), Term::CodePointList(_)) => {
                matches!((self.code_points(), other.code_points()), (Some(a), Some(b)) if a == b)
            }
            (Term::Tuple(a), Term::Tuple(b)) => a == b,
            _ => false,
        }
    }
}
