//! Single-pass collection of a module's components and exports.
//!
//! The collector walks only the top level of the program. Components declared
//! inside other functions are invisible to module consumers and are ignored
//! by design, as are imports: only locally declared bindings participate in
//! the compound surface of a file.

use std::path::Path;

use oxc_allocator::Allocator;
use oxc_ast::ast::{
    Declaration, Expression, ExportDefaultDeclarationKind, ModuleExportName, Program, Statement,
    VariableDeclaration,
};
use oxc_parser::Parser;
use oxc_span::{SourceType, Span};
use sweepit_kit::naming::is_component_name;
use sweepit_kit::{CompactString, FxHashMap};

use crate::delegation::{delegates_of_arrow, delegates_of_function};
use crate::model::ModuleSurvey;

/// Parse `source` and survey its compound-component surface.
///
/// The file name selects the dialect via its extension and provides the stem
/// the Block resolver matches against. Unparseable sources yield an empty
/// survey; a file that does not parse has no surface to check.
pub fn survey_source(source: &str, filename: &str) -> ModuleSurvey {
    let file_stem = Path::new(filename)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(filename);
    let source_type = SourceType::from_path(filename).unwrap_or_else(|_| SourceType::tsx());

    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, source_type).parse();
    if ret.panicked {
        return ModuleSurvey::new(file_stem);
    }

    survey_program(&ret.program, file_stem)
}

/// Survey an already parsed program.
pub fn survey_program(program: &Program<'_>, file_stem: &str) -> ModuleSurvey {
    let mut collector = Collector {
        survey: ModuleSurvey::new(file_stem),
        object_bindings: FxHashMap::default(),
        pending_exports: Vec::new(),
    };

    for stmt in program.body.iter() {
        collector.visit_statement(stmt);
    }

    collector.finish()
}

struct Collector {
    survey: ModuleSurvey,
    /// Capitalized variables bound to plain object literals, by name. An
    /// export of one of these (inline or via specifier) becomes an
    /// object-export record.
    object_bindings: FxHashMap<CompactString, Span>,
    /// Export specifiers seen before all declarations are known. Resolved
    /// against the registry at the end of the walk; forward declarations are
    /// legal in a module.
    pending_exports: Vec<(CompactString, CompactString, Span)>,
}

impl Collector {
    fn visit_statement(&mut self, stmt: &Statement<'_>) {
        match stmt {
            Statement::FunctionDeclaration(func) => {
                if let Some(id) = &func.id {
                    if is_component_name(&id.name) {
                        self.survey
                            .register_component(&id.name, id.span, delegates_of_function(func));
                    }
                }
            }
            Statement::VariableDeclaration(decl) => {
                self.visit_variable_declaration(decl, false);
            }
            Statement::ExportNamedDeclaration(export) => {
                // Re-exports and type-only exports are not part of the
                // runtime surface of this module.
                if export.source.is_some() || export.export_kind.is_type() {
                    return;
                }
                match &export.declaration {
                    Some(Declaration::FunctionDeclaration(func)) => {
                        if let Some(id) = &func.id {
                            if is_component_name(&id.name) {
                                self.survey.register_component(
                                    &id.name,
                                    id.span,
                                    delegates_of_function(func),
                                );
                                self.survey.add_export(&id.name, &id.name, id.span);
                            }
                        }
                    }
                    Some(Declaration::VariableDeclaration(decl)) => {
                        self.visit_variable_declaration(decl, true);
                    }
                    _ => {}
                }
                for specifier in export.specifiers.iter() {
                    if specifier.export_kind.is_type() {
                        continue;
                    }
                    let (Some(local), Some(public)) = (
                        export_name(&specifier.local),
                        export_name(&specifier.exported),
                    ) else {
                        continue;
                    };
                    self.pending_exports.push((
                        CompactString::new(local),
                        CompactString::new(public),
                        specifier.span,
                    ));
                }
            }
            Statement::ExportDefaultDeclaration(export) => {
                match &export.declaration {
                    ExportDefaultDeclarationKind::FunctionDeclaration(func) => {
                        if let Some(id) = &func.id {
                            if is_component_name(&id.name) {
                                self.survey.register_component(
                                    &id.name,
                                    id.span,
                                    delegates_of_function(func),
                                );
                                // The default export carries no public alias;
                                // it surfaces under the local name.
                                self.survey.add_export(&id.name, &id.name, id.span);
                            }
                        }
                    }
                    _ => {
                        if let Some(expr) = export.declaration.as_expression() {
                            if let Expression::Identifier(ident) = unwrap_expression(expr) {
                                self.pending_exports.push((
                                    CompactString::new(&ident.name),
                                    CompactString::new(&ident.name),
                                    ident.span,
                                ));
                            }
                        }
                    }
                }
            }
            _ => {}
        }
    }

    fn visit_variable_declaration(&mut self, decl: &VariableDeclaration<'_>, exported: bool) {
        for declarator in decl.declarations.iter() {
            let Some(id) = declarator.id.get_binding_identifier() else {
                continue;
            };
            if !is_component_name(&id.name) {
                continue;
            }
            let Some(init) = &declarator.init else {
                continue;
            };
            match unwrap_expression(init) {
                Expression::ArrowFunctionExpression(arrow) => {
                    self.survey
                        .register_component(&id.name, id.span, delegates_of_arrow(arrow));
                    if exported {
                        self.survey.add_export(&id.name, &id.name, id.span);
                    }
                }
                Expression::FunctionExpression(func) => {
                    self.survey
                        .register_component(&id.name, id.span, delegates_of_function(func));
                    if exported {
                        self.survey.add_export(&id.name, &id.name, id.span);
                    }
                }
                Expression::ObjectExpression(_) => {
                    self.object_bindings.insert(CompactString::new(&id.name), id.span);
                    if exported {
                        self.survey.add_object_export(&id.name, id.span);
                    }
                }
                _ => {}
            }
        }
    }

    /// Resolve pending export specifiers now that every declaration is known.
    fn finish(mut self) -> ModuleSurvey {
        for (local, public, span) in self.pending_exports {
            if self.survey.is_component(&local) {
                self.survey.add_export(&local, &public, span);
            } else if let Some(&object_span) = self.object_bindings.get(local.as_str()) {
                self.survey.add_object_export(&local, object_span);
            }
        }
        self.survey
    }
}

/// Strip wrappers that do not change which value an expression produces.
pub(crate) fn unwrap_expression<'a, 'b>(expr: &'b Expression<'a>) -> &'b Expression<'a> {
    match expr {
        Expression::ParenthesizedExpression(paren) => unwrap_expression(&paren.expression),
        Expression::TSAsExpression(cast) => unwrap_expression(&cast.expression),
        Expression::TSSatisfiesExpression(cast) => unwrap_expression(&cast.expression),
        Expression::TSNonNullExpression(cast) => unwrap_expression(&cast.expression),
        _ => expr,
    }
}

fn export_name<'a>(name: &'a ModuleExportName<'_>) -> Option<&'a str> {
    match name {
        ModuleExportName::IdentifierName(id) => Some(id.name.as_str()),
        ModuleExportName::IdentifierReference(id) => Some(id.name.as_str()),
        // String-literal export names cannot be compound aliases.
        ModuleExportName::StringLiteral(_) => None,
    }
}
