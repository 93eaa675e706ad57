//! AST visitor collecting translation call sites.

use swc_common::SourceMap;
use swc_ecma_ast::{CallExpr, Callee, Expr, Lit, MemberProp, Tpl};
use swc_ecma_visit::{Visit, VisitWith};

/// A literal key found at a translation call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCallSite {
    pub raw_key: String,
    /// 1-indexed line of the call.
    pub line: usize,
}

/// Collects the literal first argument of every recognized translation call.
///
/// Recognized call forms, for a configured function `t` and rich method `rich`:
/// - `t("key")`
/// - `i18n.t("key")` (any object whose method is a configured function)
/// - `t.rich("key")`
///
/// Non-literal arguments (`t(key)`, `` t(`a.${b}`) ``) are skipped.
pub struct TranslationCallVisitor<'a> {
    source_map: &'a SourceMap,
    functions: &'a [String],
    rich_methods: &'a [String],
    pub calls: Vec<KeyCallSite>,
}

impl<'a> TranslationCallVisitor<'a> {
    pub fn new(
        source_map: &'a SourceMap,
        functions: &'a [String],
        rich_methods: &'a [String],
    ) -> Self {
        Self {
            source_map,
            functions,
            rich_methods,
            calls: Vec::new(),
        }
    }

    fn is_function(&self, name: &str) -> bool {
        self.functions.iter().any(|f| f == name)
    }

    fn is_rich_method(&self, name: &str) -> bool {
        self.rich_methods.iter().any(|m| m == name)
    }

    fn is_translation_callee(&self, callee: &Callee) -> bool {
        let Callee::Expr(expr) = callee else {
            return false;
        };
        match &**expr {
            Expr::Ident(ident) => self.is_function(ident.sym.as_str()),
            Expr::Member(member) => {
                let MemberProp::Ident(prop) = &member.prop else {
                    return false;
                };
                let method = prop.sym.as_str();
                if self.is_function(method) {
                    return true;
                }
                matches!(&*member.obj, Expr::Ident(obj) if self.is_function(obj.sym.as_str()))
                    && self.is_rich_method(method)
            }
            _ => false,
        }
    }

    fn literal_key(expr: &Expr) -> Option<String> {
        match expr {
            Expr::Lit(Lit::Str(s)) => s.value.as_str().map(|s| s.to_string()),
            Expr::Tpl(tpl) => Self::simple_template(tpl),
            Expr::Paren(paren) => Self::literal_key(&paren.expr),
            _ => None,
        }
    }

    /// Only template literals without interpolation are keys.
    fn simple_template(tpl: &Tpl) -> Option<String> {
        if !tpl.exprs.is_empty() || tpl.quasis.len() != 1 {
            return None;
        }
        tpl.quasis[0]
            .cooked
            .as_ref()
            .and_then(|s| s.as_str().map(|s| s.to_string()))
    }
}

impl Visit for TranslationCallVisitor<'_> {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        if self.is_translation_callee(&node.callee)
            && let Some(arg) = node.args.first()
            && arg.spread.is_none()
            && let Some(raw_key) = Self::literal_key(&arg.expr)
            && !raw_key.is_empty()
        {
            let line = self.source_map.lookup_char_pos(node.span.lo).line;
            self.calls.push(KeyCallSite { raw_key, line });
        }

        node.visit_children_with(self);
    }
}
