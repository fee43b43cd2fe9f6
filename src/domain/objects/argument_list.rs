/// Arguments an extension received, rendered as a bracketed list of quoted
/// strings, e.g. `['a', 'b']`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArgumentList(Vec<String>);

impl ArgumentList {
    pub fn new(arguments: Vec<String>) -> Self {
        ArgumentList(arguments)
    }

    fn quote(argument: &str) -> String {
        // double quotes only when that avoids escaping
        let quote = if argument.contains('\'') && !argument.contains('"') {
            '"'
        } else {
            '\''
        };

        let mut quoted = String::with_capacity(argument.len() + 2);
        quoted.push(quote);
        for c in argument.chars() {
            match c {
                '\\' => quoted.push_str("\\\\"),
                '\n' => quoted.push_str("\\n"),
                '\r' => quoted.push_str("\\r"),
                '\t' => quoted.push_str("\\t"),
                c if c == quote => {
                    quoted.push('\\');
                    quoted.push(c);
                }
                c => quoted.push(c),
            }
        }
        quoted.push(quote);

        quoted
    }
}

impl std::fmt::Display for ArgumentList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let items = self
            .0
            .iter()
            .map(|argument| Self::quote(argument))
            .collect::<Vec<_>>();

        write!(f, "[{}]", items.join(", "))
    }
}
