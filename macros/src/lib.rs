use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use syn::parse::{Parse, ParseStream};
use syn::{Expr, Ident, Lit, LitStr, Token};

/// Macro input representation:
/// include_dictionary!("path/to/file.txt", max_edit_distance = 2, response_limit = 10, ignore_valid_words = true)
struct IncludeDictionaryArgs {
    path: LitStr,
    assignments: Vec<(Ident, Expr)>,
}

impl Parse for IncludeDictionaryArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let path: LitStr = input.parse()?;

        let mut assignments = Vec::new();

        while input.parse::<Token![,]>().is_ok() {
            // trailing comma
            if input.is_empty() {
                break;
            }

            let ident: Ident = input.parse()?;
            let _eq: Token![=] = input.parse()?;
            let value: Expr = input.parse()?;

            assignments.push((ident, value));
        }

        Ok(IncludeDictionaryArgs { path, assignments })
    }
}

struct Settings {
    max_edit_distance: usize,
    response_limit: usize,
    ignore_valid_words: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_edit_distance: 2,
            response_limit: 10,
            ignore_valid_words: true,
        }
    }
}

fn int_literal(ident: &Ident, expr: &Expr) -> syn::Result<usize> {
    if let Expr::Lit(el) = expr {
        if let Lit::Int(li) = &el.lit {
            return li.base10_parse::<usize>();
        }
    }
    Err(syn::Error::new_spanned(
        expr,
        format!("{ident} must be a non-negative integer literal"),
    ))
}

fn bool_literal(ident: &Ident, expr: &Expr) -> syn::Result<bool> {
    if let Expr::Lit(el) = expr {
        if let Lit::Bool(lb) = &el.lit {
            return Ok(lb.value);
        }
    }
    Err(syn::Error::new_spanned(
        expr,
        format!("{ident} must be a boolean literal"),
    ))
}

fn settings(args: &IncludeDictionaryArgs) -> syn::Result<Settings> {
    let mut settings = Settings::default();

    for (ident, expr) in args.assignments.iter() {
        match ident.to_string().as_str() {
            "max_edit_distance" => settings.max_edit_distance = int_literal(ident, expr)?,
            "response_limit" => {
                let limit = int_literal(ident, expr)?;
                if limit == 0 {
                    return Err(syn::Error::new_spanned(
                        expr,
                        "response_limit must be at least 1",
                    ));
                }
                settings.response_limit = limit;
            }
            "ignore_valid_words" => settings.ignore_valid_words = bool_literal(ident, expr)?,
            other => {
                return Err(syn::Error::new_spanned(
                    ident,
                    format!("include_dictionary!: unknown option `{other}`"),
                ))
            }
        }
    }

    Ok(settings)
}

/// Read the word list. A first meaningful line made of digits is a word count
/// and only that many following lines are taken; otherwise every non-blank,
/// non-comment line is a word. Words are lowercased to match the engine's
/// stored form.
fn read_words(path: &Path) -> Result<BTreeSet<String>, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("failed to open dictionary file '{}': {}", path.display(), e))?;

    let mut lines = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .peekable();

    let declared = match lines.peek() {
        Some(first) if first.bytes().all(|b| b.is_ascii_digit()) => {
            let count = first
                .parse::<usize>()
                .map_err(|e| format!("invalid word count {first:?}: {e}"))?;
            lines.next();
            Some(count)
        }
        _ => None,
    };

    let raw: Vec<&str> = match declared {
        Some(count) => {
            let words: Vec<&str> = lines.take(count).collect();
            if words.len() < count {
                return Err(format!(
                    "'{}' declares {} words but only {} were present",
                    path.display(),
                    count,
                    words.len()
                ));
            }
            words
        }
        None => lines.collect(),
    };

    // BTreeSet keeps the emitted set deterministic and free of duplicate keys.
    Ok(raw
        .into_iter()
        .map(str::to_lowercase)
        .collect())
}

/// include_dictionary!("path/to/file.txt", max_edit_distance = 2, response_limit = 10, ignore_valid_words = true)
///
/// Reads a word list at compile time (path relative to `CARGO_MANIFEST_DIR`),
/// embeds it as a `::phf::Set<&'static str>` and evaluates to a
/// `SuggestionEngine` built from that set. The word list may be counted (a
/// leading count line) or plain (one word per line, `#` comments allowed).
///
/// All options are optional; `response_limit = 0` is a compile error.
#[proc_macro]
pub fn include_dictionary(input: TokenStream) -> TokenStream {
    let args = syn::parse_macro_input!(input as IncludeDictionaryArgs);

    let settings = match settings(&args) {
        Ok(s) => s,
        Err(e) => return e.to_compile_error().into(),
    };

    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let file_path = Path::new(&manifest_dir).join(args.path.value());

    let words = match read_words(&file_path) {
        Ok(words) => words,
        Err(msg) => {
            return syn::Error::new(args.path.span(), format!("include_dictionary!: {msg}"))
                .to_compile_error()
                .into()
        }
    };

    let word_lits = words.iter().map(|w| LitStr::new(w, Span::call_site()));
    let max_edit_distance = settings.max_edit_distance;
    let response_limit = settings.response_limit;
    let ignore_valid_words = settings.ignore_valid_words;

    let expanded = quote! {
        {
            static DICT_PHF: ::phf::Set<&'static str> = ::phf::phf_set! {
                #(#word_lits, )*
            };

            ::autocorrectrs::SuggestionEngine::new(
                DICT_PHF.iter(),
                ::autocorrectrs::Config::from_checked_parts(
                    #max_edit_distance,
                    #response_limit,
                    #ignore_valid_words,
                ),
            )
        }
    };

    TokenStream::from(expanded)
}
