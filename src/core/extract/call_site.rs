//! Call-site collection: the boundary between the host-language parser and
//! message extraction.
//!
//! The collector reduces every call whose callee is a bare identifier to a
//! [`CallSite`] descriptor. Everything downstream works on descriptors only,
//! so another parser front-end can feed the same extraction logic.

use std::{fs, sync::Arc};

use swc_common::SourceMap;
use swc_ecma_ast::{CallExpr, Callee, Expr, ExprOrSpread, Lit, Module};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::{
    Error, Result, SourceLocation, file_scanner::SourceFile, parsers::jsx::parse_jsx_source,
};

/// A call expression with a bare identifier callee, e.g. `tr("Open", "menu")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    /// Name of the called function.
    pub callee: String,
    /// One entry per argument: `Some(text)` for literal strings, `None` otherwise.
    pub args: Vec<Option<String>>,
    pub location: SourceLocation,
}

impl CallSite {
    pub fn new(
        callee: impl Into<String>,
        args: Vec<Option<String>>,
        location: SourceLocation,
    ) -> Self {
        Self {
            callee: callee.into(),
            args,
            location,
        }
    }
}

/// AST visitor collecting [`CallSite`]s in source order.
pub struct CallSiteCollector<'a> {
    file_path: &'a str,
    source_map: &'a SourceMap,
    call_sites: Vec<CallSite>,
}

impl<'a> CallSiteCollector<'a> {
    pub fn new(file_path: &'a str, source_map: &'a SourceMap) -> Self {
        Self {
            file_path,
            source_map,
            call_sites: Vec::new(),
        }
    }

    pub fn collect(mut self, module: &Module) -> Vec<CallSite> {
        self.visit_module(module);
        self.call_sites
    }
}

impl Visit for CallSiteCollector<'_> {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        if let Callee::Expr(expr) = &node.callee
            && let Expr::Ident(ident) = &**expr
        {
            let loc = self.source_map.lookup_char_pos(node.span.lo);
            self.call_sites.push(CallSite::new(
                ident.sym.as_str(),
                node.args.iter().map(literal_text).collect(),
                SourceLocation::new(self.file_path, loc.line),
            ));
        }

        // Arguments may contain further calls: tr(tr("inner"))
        node.visit_children_with(self);
    }
}

/// Unescaped text of a literal string argument.
///
/// String literals and template literals without substitutions count as
/// literals. Spread arguments and every other expression do not.
fn literal_text(arg: &ExprOrSpread) -> Option<String> {
    if arg.spread.is_some() {
        return None;
    }
    match &*arg.expr {
        Expr::Lit(Lit::Str(s)) => s.value.as_str().map(str::to_string),
        Expr::Tpl(tpl) if tpl.exprs.is_empty() => tpl
            .quasis
            .first()
            .and_then(|quasi| quasi.cooked.as_ref())
            .and_then(|cooked| cooked.as_str())
            .map(str::to_string),
        _ => None,
    }
}

/// Read, parse and collect the call sites of one source file.
pub fn collect_call_sites(file: &SourceFile) -> Result<Vec<CallSite>> {
    let code = fs::read_to_string(&file.path).map_err(|e| Error::io(&file.path, e))?;
    let parsed = parse_jsx_source(code, &file.path, Arc::new(SourceMap::default()))?;

    let collector = CallSiteCollector::new(&file.display_path, &parsed.source_map);
    Ok(collector.collect(&parsed.module))
}
