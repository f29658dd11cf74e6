//! Delegation graph extraction and chain-depth analysis.
//!
//! A component "delegates" to another when its returned markup references it
//! as a self-closing custom element (`<Page />`, `<Dialog.Trigger />`). The
//! longest chain of such single-hop relays is the component's chain depth;
//! deep chains indicate relay components that only hand rendering off.

use oxc_ast::ast::{
    ArrowFunctionExpression, Expression, Function, FunctionBody, JSXChild, JSXElement,
    JSXElementName, JSXFragment, JSXMemberExpressionObject, Statement,
};
use sweepit_kit::naming::is_component_name;
use sweepit_kit::{CompactString, FxHashMap, FxHashSet};

use crate::collect::unwrap_expression;
use crate::model::ModuleSurvey;

/// Depth contributed by a delegation edge that closes a cycle.
///
/// A name revisited while still on the active recursion stack contributes
/// this fixed value instead of recursing, which both terminates the walk and
/// keeps every member of the cycle above the default reporting threshold.
const CYCLE_DEPTH: u32 = 3;

/// Collect the delegate names for a function-declaration component body.
pub(crate) fn delegates_of_function(func: &Function<'_>) -> Vec<CompactString> {
    let mut delegates = DelegateSet::default();
    if let Some(body) = &func.body {
        delegates.collect_body(body);
    }
    delegates.into_names()
}

/// Collect the delegate names for an arrow-function component body.
pub(crate) fn delegates_of_arrow(arrow: &ArrowFunctionExpression<'_>) -> Vec<CompactString> {
    let mut delegates = DelegateSet::default();
    if arrow.expression {
        // Concise arrow: () => <markup />
        if let Some(Statement::ExpressionStatement(stmt)) = arrow.body.statements.first() {
            delegates.collect_markup(&stmt.expression);
        }
    } else {
        delegates.collect_body(&arrow.body);
    }
    delegates.into_names()
}

/// Insertion-ordered, deduplicated accumulator of delegate names.
#[derive(Default)]
struct DelegateSet {
    names: Vec<CompactString>,
    seen: FxHashSet<CompactString>,
}

impl DelegateSet {
    fn into_names(self) -> Vec<CompactString> {
        self.names
    }

    fn add(&mut self, name: &str) {
        if self.seen.insert(CompactString::new(name)) {
            self.names.push(CompactString::new(name));
        }
    }

    /// Walk the `return` statements directly inside a block body. Returns
    /// nested in inner functions belong to those functions, not this one.
    fn collect_body(&mut self, body: &FunctionBody<'_>) {
        for stmt in body.statements.iter() {
            if let Statement::ReturnStatement(ret) = stmt {
                if let Some(argument) = &ret.argument {
                    self.collect_markup(argument);
                }
            }
        }
    }

    /// Collect from an expression iff it is markup.
    fn collect_markup(&mut self, expr: &Expression<'_>) {
        match unwrap_expression(expr) {
            Expression::JSXElement(element) => self.collect_element(element),
            Expression::JSXFragment(fragment) => self.collect_fragment(fragment),
            _ => {}
        }
    }

    fn collect_element(&mut self, element: &JSXElement<'_>) {
        // Self-closing custom elements are the delegation edges.
        if element.closing_element.is_none() {
            if let Some(name) = custom_tag_name(&element.opening_element.name) {
                self.add(name);
            }
        }

        // Recurse only through markup children, not arbitrary expressions.
        for child in element.children.iter() {
            match child {
                JSXChild::Element(child_element) => self.collect_element(child_element),
                JSXChild::Fragment(child_fragment) => self.collect_fragment(child_fragment),
                _ => {}
            }
        }
    }

    fn collect_fragment(&mut self, fragment: &JSXFragment<'_>) {
        for child in fragment.children.iter() {
            match child {
                JSXChild::Element(child_element) => self.collect_element(child_element),
                JSXChild::Fragment(child_fragment) => self.collect_fragment(child_fragment),
                _ => {}
            }
        }
    }
}

/// Extract the component name of a custom (capitalized) element tag.
///
/// For member-access tags (`<Dialog.Trigger />`) the edge targets the object
/// identifier, since that is the local binding being delegated through.
fn custom_tag_name<'a>(name: &'a JSXElementName<'_>) -> Option<&'a str> {
    match name {
        JSXElementName::Identifier(id) => {
            is_component_name(&id.name).then(|| id.name.as_str())
        }
        JSXElementName::IdentifierReference(id) => {
            is_component_name(&id.name).then(|| id.name.as_str())
        }
        JSXElementName::MemberExpression(member) => match &member.object {
            JSXMemberExpressionObject::IdentifierReference(id) => {
                is_component_name(&id.name).then(|| id.name.as_str())
            }
            _ => None,
        },
        _ => None,
    }
}

/// Compute the delegation chain depth of every registered component.
///
/// depth(X) is 1 when X delegates to no registered component, otherwise
/// 1 + max(depth(Y)) over X's registered delegates. The memo is shared
/// across the whole run; the visiting set is per start component and makes
/// cyclic graphs terminate with depths capped by the cycle sentinel.
pub fn compute_depths(survey: &ModuleSurvey) -> FxHashMap<CompactString, u32> {
    let mut memo = FxHashMap::default();
    for component in survey.components() {
        let mut visiting = FxHashSet::default();
        chain_depth(&component.name, survey, &mut memo, &mut visiting);
    }
    memo
}

fn chain_depth(
    name: &str,
    survey: &ModuleSurvey,
    memo: &mut FxHashMap<CompactString, u32>,
    visiting: &mut FxHashSet<CompactString>,
) -> u32 {
    if let Some(&depth) = memo.get(name) {
        return depth;
    }
    if visiting.contains(name) {
        return CYCLE_DEPTH;
    }
    visiting.insert(CompactString::new(name));

    let Some(component) = survey.component(name) else {
        memo.insert(CompactString::new(name), 0);
        visiting.remove(name);
        return 0;
    };

    let mut depth = 1;
    for delegate in &component.delegates {
        // Edges to names absent from the registry are dropped.
        if !survey.is_component(delegate) {
            continue;
        }
        let delegate_depth = 1 + chain_depth(delegate, survey, memo, visiting);
        depth = depth.max(delegate_depth);
    }

    memo.insert(CompactString::new(name), depth);
    visiting.remove(name);
    depth
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::survey_source;

    #[test]
    fn leaf_component_has_depth_one() {
        let survey = survey_source(
            "const Header = () => <header>title</header>;",
            "header.tsx",
        );
        let depths = compute_depths(&survey);
        assert_eq!(depths.get("Header"), Some(&1));
    }

    #[test]
    fn linear_chain_counts_every_hop() {
        let source = r#"
            const Header = () => <header>hello</header>;
            const Page = () => <Header />;
            const Root = () => <Page />;
        "#;
        let survey = survey_source(source, "root.tsx");
        let depths = compute_depths(&survey);
        assert_eq!(depths.get("Header"), Some(&1));
        assert_eq!(depths.get("Page"), Some(&2));
        assert_eq!(depths.get("Root"), Some(&3));
    }

    #[test]
    fn non_self_closing_children_are_not_edges() {
        let source = r#"
            const Item = () => <li>item</li>;
            const List = () => <Item>label</Item>;
        "#;
        let survey = survey_source(source, "list.tsx");
        let depths = compute_depths(&survey);
        assert_eq!(depths.get("List"), Some(&1));
    }

    #[test]
    fn nested_markup_is_searched_for_edges() {
        let source = r#"
            const Icon = () => <svg />;
            const Button = () => (
                <div>
                    <span>
                        <Icon />
                    </span>
                </div>
            );
        "#;
        let survey = survey_source(source, "button.tsx");
        let depths = compute_depths(&survey);
        assert_eq!(depths.get("Button"), Some(&2));
    }

    #[test]
    fn fragments_and_block_bodies_are_walked() {
        let source = r#"
            const Leaf = () => null;
            function Shell() {
                if (Math.random() > 0.5) {
                    return null;
                }
                return (
                    <>
                        <Leaf />
                    </>
                );
            }
        "#;
        let survey = survey_source(source, "shell.tsx");
        let depths = compute_depths(&survey);
        assert_eq!(depths.get("Shell"), Some(&2));
    }

    #[test]
    fn member_tags_delegate_to_the_object_binding() {
        let source = r#"
            const Dialog = () => null;
            const Opener = () => <Dialog.Trigger />;
        "#;
        let survey = survey_source(source, "opener.tsx");
        let depths = compute_depths(&survey);
        assert_eq!(depths.get("Opener"), Some(&2));
    }

    #[test]
    fn edges_to_unknown_names_are_dropped() {
        let source = r#"
            const Page = () => <ImportedWidget />;
        "#;
        let survey = survey_source(source, "page.tsx");
        let depths = compute_depths(&survey);
        assert_eq!(depths.get("Page"), Some(&1));
    }

    #[test]
    fn returns_inside_nested_functions_are_ignored() {
        let source = r#"
            const Inner = () => null;
            function Outer() {
                const helper = () => {
                    return <Inner />;
                };
                return <div>{helper()}</div>;
            }
        "#;
        let survey = survey_source(source, "outer.tsx");
        let depths = compute_depths(&survey);
        assert_eq!(depths.get("Outer"), Some(&1));
    }

    #[test]
    fn self_reference_terminates_with_bounded_depth() {
        let survey = survey_source("const Recurse = () => <Recurse />;", "recurse.tsx");
        let depths = compute_depths(&survey);
        // 1 + cycle sentinel
        assert_eq!(depths.get("Recurse"), Some(&(1 + CYCLE_DEPTH)));
    }

    #[test]
    fn mutual_recursion_terminates() {
        let source = r#"
            const Ping = () => <Pong />;
            const Pong = () => <Ping />;
        "#;
        let survey = survey_source(source, "ping.tsx");
        let depths = compute_depths(&survey);
        // Both depths are bounded by the cycle sentinel, not infinite.
        assert!(depths.values().all(|&d| d <= 2 + CYCLE_DEPTH));
        assert!(depths.values().all(|&d| d >= CYCLE_DEPTH));
    }

    #[test]
    fn forward_references_are_legal() {
        let source = r#"
            const Root = () => <Page />;
            const Page = () => <div />;
        "#;
        let survey = survey_source(source, "root.tsx");
        let depths = compute_depths(&survey);
        assert_eq!(depths.get("Root"), Some(&2));
    }
}
