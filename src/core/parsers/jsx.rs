use std::{path::Path, sync::Arc};

use swc_common::{FileName, Globals, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

use crate::core::{Error, Result};

pub struct ParsedJSX {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
}

/// Parse JavaScript/TypeScript source code into an AST.
///
/// Plain `.ts`/`.mts`/`.cts` files are parsed without JSX so that angle-bracket
/// type assertions keep working; everything else is parsed as TSX, which
/// accepts JavaScript and JSX as well.
pub fn parse_jsx_source(
    code: String,
    file_path: &Path,
    source_map: Arc<SourceMap>,
) -> Result<ParsedJSX> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.to_path_buf()).into(), code);

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: !is_plain_typescript(file_path),
            ..Default::default()
        });

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

        let module = parser.parse_module().map_err(|e| Error::Parse {
            path: file_path.to_path_buf(),
            message: format!("{:?}", e),
        })?;

        Ok(ParsedJSX { module, source_map })
    })
}

fn is_plain_typescript(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("ts" | "mts" | "cts")
    )
}
