//! The collected model of one module's compound-component surface.

use oxc_span::Span;
use sweepit_kit::{CompactString, FxHashMap};

/// A locally declared component.
///
/// Created for a capitalized function declaration or a capitalized variable
/// initialized with an arrow/function expression. Immutable once created;
/// uniqueness is by name with last-write-wins on re-declaration.
#[derive(Debug, Clone)]
pub struct ComponentRecord {
    /// Component name.
    pub name: CompactString,
    /// Span of the declaring identifier.
    pub span: Span,
    /// Names referenced as self-closing custom elements in the component's
    /// returned markup, in first-seen order, deduplicated. May include names
    /// that are not registered components (imports, namespace tags); the
    /// depth analyzer drops those edges.
    pub delegates: Vec<CompactString>,
}

/// One public export of a local component.
///
/// One record per export specifier, per default export, and per same-named
/// declaration export. A single local name may carry several records
/// (multiple aliases). Records whose local name is not a registered component
/// are discarded when collection finishes.
#[derive(Debug, Clone)]
pub struct ExportRecord {
    /// The local identifier being exported.
    pub local: CompactString,
    /// The public name it is exported under.
    pub public: CompactString,
    /// Span of the export site.
    pub span: Span,
}

/// A capitalized variable bound to a plain object literal and exported.
///
/// Tracked separately from [`ExportRecord`]: such exports are themselves a
/// violation, not a naming/aliasing subject.
#[derive(Debug, Clone)]
pub struct ObjectExportRecord {
    /// The exported variable name.
    pub name: CompactString,
    /// Span of the declaring identifier.
    pub span: Span,
}

/// The full survey of one module, built in a single traversal.
///
/// Owns the declaration registry, the export table, and the object-export
/// table. All lookups are O(1) via an index map; iteration preserves
/// registration order, which downstream tie-breaks rely on.
#[derive(Debug, Default)]
pub struct ModuleSurvey {
    file_stem: CompactString,
    components: Vec<ComponentRecord>,
    component_index: FxHashMap<CompactString, usize>,
    exports: Vec<ExportRecord>,
    object_exports: Vec<ObjectExportRecord>,
}

impl ModuleSurvey {
    /// Create an empty survey for a file with the given stem.
    pub fn new(file_stem: impl Into<CompactString>) -> Self {
        Self {
            file_stem: file_stem.into(),
            ..Self::default()
        }
    }

    /// The file's base name with the extension stripped.
    #[inline]
    pub fn file_stem(&self) -> &str {
        &self.file_stem
    }

    /// Register a component declaration.
    ///
    /// A later declaration with the same name overwrites the earlier record
    /// in place, keeping its original registration position.
    pub fn register_component(&mut self, name: &str, span: Span, delegates: Vec<CompactString>) {
        let record = ComponentRecord {
            name: CompactString::new(name),
            span,
            delegates,
        };
        if let Some(&idx) = self.component_index.get(name) {
            self.components[idx] = record;
        } else {
            self.component_index
                .insert(CompactString::new(name), self.components.len());
            self.components.push(record);
        }
    }

    /// Record a public export of a local component.
    pub fn add_export(&mut self, local: &str, public: &str, span: Span) {
        self.exports.push(ExportRecord {
            local: CompactString::new(local),
            public: CompactString::new(public),
            span,
        });
    }

    /// Record an exported capitalized object literal.
    ///
    /// One record per binding: an object exported both inline and through a
    /// specifier still yields a single record.
    pub fn add_object_export(&mut self, name: &str, span: Span) {
        if self.object_exports.iter().any(|o| o.name == name) {
            return;
        }
        self.object_exports.push(ObjectExportRecord {
            name: CompactString::new(name),
            span,
        });
    }

    /// Look up a registered component by name.
    #[inline]
    pub fn component(&self, name: &str) -> Option<&ComponentRecord> {
        self.component_index.get(name).map(|&idx| &self.components[idx])
    }

    /// Check whether a name is a registered component.
    #[inline]
    pub fn is_component(&self, name: &str) -> bool {
        self.component_index.contains_key(name)
    }

    /// All registered components, in registration order.
    #[inline]
    pub fn components(&self) -> &[ComponentRecord] {
        &self.components
    }

    /// All export records, in collection order.
    #[inline]
    pub fn exports(&self) -> &[ExportRecord] {
        &self.exports
    }

    /// All object-export records, in collection order.
    #[inline]
    pub fn object_exports(&self) -> &[ObjectExportRecord] {
        &self.object_exports
    }
}
