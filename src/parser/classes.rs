//! Class synthesis: group constructors and `Class::method` functions.
//!
//! A constructor is a function named like its return type (`Foo` returning `Foo`).
//! Every `Foo::name` function then becomes a method of class `Foo`, in list order.

use crate::model::{ClassRecord, Documentation, FunctionRecord};

const NAMESPACE_SEPARATOR: &str = "::";

/// Split `functions` into classes and the functions that stay top-level.
pub fn extract_classes(functions: Vec<FunctionRecord>) -> Documentation {
    let mut classes: Vec<ClassRecord> = Vec::new();
    let mut remaining: Vec<FunctionRecord> = Vec::with_capacity(functions.len());

    for function in functions {
        if is_constructor(&function) {
            classes.push(ClassRecord::from_constructor(function));
        } else {
            remaining.push(function);
        }
    }

    let mut functions = Vec::with_capacity(remaining.len());
    for function in remaining {
        let owner = match function.name.split(NAMESPACE_SEPARATOR).collect::<Vec<_>>()[..] {
            [owner, _] => classes.iter().position(|cls| cls.name == owner),
            _ => None,
        };
        match owner {
            Some(index) => classes[index].add_method(function),
            None => functions.push(function),
        }
    }

    Documentation { classes, functions }
}

fn is_constructor(function: &FunctionRecord) -> bool {
    function.name == function.return_type && !function.name.contains(NAMESPACE_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn func(name: &str, return_type: &str) -> FunctionRecord {
        FunctionRecord {
            name: name.to_string(),
            return_type: return_type.to_string(),
            ..Default::default()
        }
    }

    fn names(functions: &[FunctionRecord]) -> Vec<&str> {
        functions.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn groups_constructor_and_methods() {
        let doc = extract_classes(vec![
            func("Foo", "Foo"),
            func("Foo::bar", ""),
            func("Foo::baz", "int"),
            func("qux", ""),
        ]);
        assert_eq!(doc.classes.len(), 1);
        assert_eq!(doc.classes[0].name, "Foo");
        assert_eq!(doc.classes[0].constructor.name, "Foo");
        assert_eq!(names(&doc.classes[0].methods), vec!["Foo::bar", "Foo::baz"]);
        assert_eq!(names(&doc.functions), vec!["qux"]);
    }

    #[test]
    fn methods_before_constructor_still_attach() {
        let doc = extract_classes(vec![
            func("Foo::bar", ""),
            func("Bar", "Bar"),
            func("Foo", "Foo"),
            func("Bar::go", ""),
            func("Foo::baz", ""),
        ]);
        let class_names: Vec<&str> = doc.classes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(class_names, vec!["Bar", "Foo"]);
        assert_eq!(names(&doc.classes[0].methods), vec!["Bar::go"]);
        assert_eq!(names(&doc.classes[1].methods), vec!["Foo::bar", "Foo::baz"]);
        assert!(doc.functions.is_empty());
    }

    #[test]
    fn namespaced_name_is_never_a_constructor() {
        let doc = extract_classes(vec![func("Foo::Foo", "Foo::Foo")]);
        assert!(doc.classes.is_empty());
        assert_eq!(names(&doc.functions), vec!["Foo::Foo"]);
    }

    #[test]
    fn unmatched_method_stays_top_level() {
        let doc = extract_classes(vec![func("Foo", "Foo"), func("Other::run", "")]);
        assert!(doc.classes[0].methods.is_empty());
        assert_eq!(names(&doc.functions), vec!["Other::run"]);
    }

    #[test]
    fn deep_namespaces_are_not_methods() {
        let doc = extract_classes(vec![func("Foo", "Foo"), func("Foo::inner::run", "")]);
        assert!(doc.classes[0].methods.is_empty());
        assert_eq!(names(&doc.functions), vec!["Foo::inner::run"]);
    }

    #[test]
    fn untyped_function_is_not_a_constructor() {
        let doc = extract_classes(vec![func("Foo", ""), func("Foo::bar", "")]);
        assert!(doc.classes.is_empty());
        assert_eq!(names(&doc.functions), vec!["Foo", "Foo::bar"]);
    }
}
