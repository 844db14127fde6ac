//! Doc-comment fallback for option descriptions.

use syn::{Attribute, Expr, ExprLit, Lit, LitStr, Meta};

/// Returns the first paragraph of the doc comment as a single line.
///
/// `/// Retry budget.` on a field yields `Some("Retry budget.")`; fields
/// without documentation yield `None`.
pub(crate) fn doc_description(attrs: &[Attribute]) -> Option<LitStr> {
    let mut lines = Vec::new();
    let mut span = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("doc")) {
        let Meta::NameValue(nv) = &attr.meta else {
            continue;
        };
        let Expr::Lit(ExprLit {
            lit: Lit::Str(s), ..
        }) = &nv.value
        else {
            continue;
        };
        let value = s.value();
        let line = value.trim();
        if line.is_empty() {
            if lines.is_empty() {
                continue;
            }
            break;
        }
        span.get_or_insert_with(|| s.span());
        lines.push(line.to_owned());
    }
    span.map(|span| LitStr::new(&lines.join(" "), span))
}
