//! Resolved symbol-table model shared with the frontend.
//!
//! The resolver owns these shapes; the classifier borrows them per query.
//! Everything is compared by value, so two `Declaration`s naming the same
//! top-level symbol are interchangeable no matter which resolution pass
//! produced them. All types serialize, which lets a frontend hand over
//! symbol-table snapshots and lets tests load fixtures from JSON.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod builtins;

/// Primitive value types built into the standard library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    Byte,
    Short,
    Int,
    Char,
    Long,
    Float,
    Double,
    Boolean,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 8] = [
        PrimitiveKind::Byte,
        PrimitiveKind::Short,
        PrimitiveKind::Int,
        PrimitiveKind::Char,
        PrimitiveKind::Long,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
        PrimitiveKind::Boolean,
    ];

    /// Simple class name, e.g. `Int` for `kotlin.Int`.
    pub fn type_name(self) -> &'static str {
        match self {
            PrimitiveKind::Byte => "Byte",
            PrimitiveKind::Short => "Short",
            PrimitiveKind::Int => "Int",
            PrimitiveKind::Char => "Char",
            PrimitiveKind::Long => "Long",
            PrimitiveKind::Float => "Float",
            PrimitiveKind::Double => "Double",
            PrimitiveKind::Boolean => "Boolean",
        }
    }

    /// Whether values of this type participate in numeric range membership.
    pub fn is_numeric(self) -> bool {
        !matches!(self, PrimitiveKind::Boolean)
    }
}

/// Immediate enclosing scope of a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Container {
    /// Top level of a package, identified by its dotted fully-qualified name.
    Package(String),
    /// Nested inside a class or interface.
    Class(Box<Declaration>),
    /// Local to a function body.
    Function(String),
}

/// What kind of symbol a declaration identity refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeclarationKind {
    Class,
    Interface,
    /// Built-in primitive class such as `kotlin.Int`.
    Primitive(PrimitiveKind),
    /// Generic type parameter together with its declared upper bounds.
    TypeParameter { upper_bounds: Vec<TypeRef> },
}

/// Identity of a resolved declaration: simple name plus enclosing scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: String,
    pub container: Container,
    pub kind: DeclarationKind,
}

impl Declaration {
    /// Top-level class in the given package.
    pub fn class(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            container: Container::Package(package.into()),
            kind: DeclarationKind::Class,
        }
    }

    /// Top-level interface in the given package.
    pub fn interface(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            container: Container::Package(package.into()),
            kind: DeclarationKind::Interface,
        }
    }

    /// Type parameter with the given upper bounds. The declaring callable's
    /// name is not tracked; no classifier looks at it.
    pub fn type_parameter(name: impl Into<String>, upper_bounds: Vec<TypeRef>) -> Self {
        Self {
            name: name.into(),
            container: Container::Function(String::new()),
            kind: DeclarationKind::TypeParameter { upper_bounds },
        }
    }

    /// Fully-qualified name, synthesized only for package-level declarations.
    ///
    /// Declarations nested in a class or function have no stable
    /// fully-qualified name for lookup purposes and yield `None`.
    pub fn fq_name(&self) -> Option<String> {
        match &self.container {
            Container::Package(package) => Some(format!("{}.{}", package, self.name)),
            Container::Class(_) | Container::Function(_) => None,
        }
    }

    /// True iff this declaration is the top-level symbol `name` in `package`.
    ///
    /// A same-named declaration nested inside a class never matches, even
    /// when the class itself is top level in the target package.
    pub fn is_top_level_in(&self, name: &str, package: &str) -> bool {
        self.name == name && matches!(&self.container, Container::Package(p) if p == package)
    }

    /// Primitive kind when this declaration is a built-in primitive class.
    pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
        match self.kind {
            DeclarationKind::Primitive(kind) => Some(kind),
            _ => None,
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.container {
            Container::Package(package) => write!(f, "{}.{}", package, self.name),
            Container::Class(class) => write!(f, "{}.{}", class, self.name),
            Container::Function(function) if function.is_empty() => {
                write!(f, "{}", self.name)
            }
            Container::Function(function) => write!(f, "{}.{}", function, self.name),
        }
    }
}

/// Nominal type reference produced by the resolver.
///
/// `declaration` is `None` for synthetic and error-recovery types; every
/// classifier treats those as unrecognized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    pub declaration: Option<Declaration>,
    #[serde(default)]
    pub arguments: Vec<TypeRef>,
    #[serde(default)]
    pub nullable: bool,
}

impl TypeRef {
    /// Non-generic, non-nullable reference to a declaration.
    pub fn of(declaration: Declaration) -> Self {
        Self {
            declaration: Some(declaration),
            arguments: Vec::new(),
            nullable: false,
        }
    }

    /// Generic instantiation with the given type arguments.
    pub fn generic(declaration: Declaration, arguments: Vec<TypeRef>) -> Self {
        Self {
            declaration: Some(declaration),
            arguments,
            nullable: false,
        }
    }

    /// Unresolvable type, as produced by error recovery.
    pub fn error() -> Self {
        Self {
            declaration: None,
            arguments: Vec::new(),
            nullable: false,
        }
    }

    /// Nullable copy of this type.
    pub fn as_nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Primitive kind when this is a non-nullable built-in primitive type.
    ///
    /// Nullable primitives are boxed at runtime and never qualify.
    pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
        if self.nullable {
            return None;
        }
        self.declaration.as_ref().and_then(Declaration::primitive_kind)
    }

    pub fn is_primitive(&self) -> bool {
        self.primitive_kind().is_some()
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.declaration {
            Some(declaration) => write!(f, "{}", declaration)?,
            None => write!(f, "<error type>")?,
        }
        if !self.arguments.is_empty() {
            write!(f, "<")?;
            for (i, argument) in self.arguments.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", argument)?;
            }
            write!(f, ">")?;
        }
        if self.nullable {
            write!(f, "?")?;
        }
        Ok(())
    }
}

/// Where a callable is declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallableOwner {
    /// Declared at the top level of a package (free functions, extensions).
    Package(String),
    /// Member of a class or interface.
    Member(Declaration),
}

/// A resolved callable at a call site.
///
/// Property accesses surface here too: the resolver presents a property
/// read as a callable named after the property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Callable {
    pub name: String,
    pub owner: CallableOwner,
    /// Receiver type for member calls.
    #[serde(default)]
    pub dispatch_receiver: Option<TypeRef>,
    /// Receiver type for extension calls.
    #[serde(default)]
    pub extension_receiver: Option<TypeRef>,
    #[serde(default)]
    pub value_parameters: Vec<TypeRef>,
    pub return_type: TypeRef,
}

impl Callable {
    /// Top-level callable in the given package.
    pub fn top_level(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner: CallableOwner::Package(package.into()),
            dispatch_receiver: None,
            extension_receiver: None,
            value_parameters: Vec::new(),
            return_type: builtins::unit_type(),
        }
    }

    /// Member of the given class; the dispatch receiver defaults to a plain
    /// reference to the owner.
    pub fn member(owner: Declaration, name: impl Into<String>) -> Self {
        let receiver = TypeRef::of(owner.clone());
        Self {
            name: name.into(),
            owner: CallableOwner::Member(owner),
            dispatch_receiver: Some(receiver),
            extension_receiver: None,
            value_parameters: Vec::new(),
            return_type: builtins::unit_type(),
        }
    }

    pub fn with_dispatch_receiver(mut self, receiver: TypeRef) -> Self {
        self.dispatch_receiver = Some(receiver);
        self
    }

    pub fn with_extension_receiver(mut self, receiver: TypeRef) -> Self {
        self.extension_receiver = Some(receiver);
        self
    }

    pub fn with_parameters(mut self, parameters: Vec<TypeRef>) -> Self {
        self.value_parameters = parameters;
        self
    }

    pub fn returning(mut self, return_type: TypeRef) -> Self {
        self.return_type = return_type;
        self
    }

    /// True iff this callable is the top-level symbol `name` in `package`.
    pub fn is_top_level_in(&self, name: &str, package: &str) -> bool {
        self.name == name && matches!(&self.owner, CallableOwner::Package(p) if p == package)
    }

    pub fn is_member(&self) -> bool {
        matches!(self.owner, CallableOwner::Member(_))
    }
}

impl fmt::Display for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.owner {
            CallableOwner::Package(package) => write!(f, "{}.{}", package, self.name),
            CallableOwner::Member(owner) => write!(f, "{}.{}", owner, self.name),
        }
    }
}
