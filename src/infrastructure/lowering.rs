//! Lowering from `syn` syntax trees to `AstNode`.
//!
//! Children are emitted in source order so that pre-order traversal of the
//! lowered tree visits tokens left to right.

use syn::punctuated::Punctuated;
use syn::{
    BinOp, Block, Expr, FieldPat, FieldValue, FnArg, GenericArgument, GenericParam, Generics,
    ImplItem, Item, Lit, Macro, Member, Pat, Path, PathArguments, ReturnType, Signature, Stmt,
    TraitItem, Type, TypeParamBound, UnOp,
};

use crate::domain::ast::{AstNode, AstNodeKind};

pub fn lower_file(file: &syn::File) -> AstNode {
    AstNode::with_children(AstNodeKind::File, file.items.iter().map(lower_item).collect())
}

fn node(kind: AstNodeKind, children: Vec<AstNode>) -> AstNode {
    AstNode::with_children(kind, children)
}

fn ident(ident: &syn::Ident) -> AstNode {
    AstNode::ident(ident.to_string())
}

// ============ Items ============

fn lower_item(item: &Item) -> AstNode {
    match item {
        Item::Fn(func) => lower_function(&func.sig, Some(&*func.block)),
        Item::Impl(imp) => node(
            AstNodeKind::Impl,
            imp.items
                .iter()
                .filter_map(|impl_item| match impl_item {
                    ImplItem::Fn(method) => Some(lower_function(&method.sig, Some(&method.block))),
                    _ => None,
                })
                .collect(),
        ),
        Item::Trait(tr) => node(
            AstNodeKind::Trait,
            tr.items
                .iter()
                .filter_map(|trait_item| match trait_item {
                    TraitItem::Fn(method) => Some(lower_function(&method.sig, method.default.as_ref())),
                    _ => None,
                })
                .collect(),
        ),
        Item::Mod(module) => node(
            AstNodeKind::Mod,
            module
                .content
                .as_ref()
                .map(|(_, items)| items.iter().map(lower_item).collect())
                .unwrap_or_default(),
        ),
        Item::Const(c) => node(
            AstNodeKind::ConstDecl,
            vec![ident(&c.ident), lower_type(&c.ty), lower_expr(&c.expr)],
        ),
        Item::Static(s) => node(
            AstNodeKind::StaticDecl,
            vec![ident(&s.ident), lower_type(&s.ty), lower_expr(&s.expr)],
        ),
        _ => AstNode::new(AstNodeKind::Item),
    }
}

fn lower_function(sig: &Signature, body: Option<&Block>) -> AstNode {
    let mut children = vec![ident(&sig.ident)];
    if !sig.generics.params.is_empty() {
        children.push(lower_generics(&sig.generics));
    }

    let params = sig
        .inputs
        .iter()
        .map(|arg| match arg {
            FnArg::Receiver(receiver) => {
                let mut parts = vec![AstNode::ident("self")];
                if receiver.colon_token.is_some() {
                    parts.push(lower_type(&receiver.ty));
                }
                node(AstNodeKind::Receiver, parts)
            }
            FnArg::Typed(typed) => node(
                AstNodeKind::Param,
                vec![lower_pat(&typed.pat), lower_type(&typed.ty)],
            ),
        })
        .collect();
    children.push(node(AstNodeKind::Params, params));

    if let ReturnType::Type(_, ty) = &sig.output {
        children.push(node(AstNodeKind::Results, vec![lower_type(ty)]));
    }
    if let Some(block) = body {
        children.push(lower_block(block));
    }
    node(AstNodeKind::FunctionDecl, children)
}

fn lower_generics(generics: &Generics) -> AstNode {
    let params = generics
        .params
        .iter()
        .filter_map(|param| match param {
            GenericParam::Type(tp) => {
                let mut parts = vec![ident(&tp.ident)];
                parts.extend(lower_bounds(&tp.bounds));
                parts.extend(tp.default.as_ref().map(lower_type));
                Some(node(AstNodeKind::TypeParam, parts))
            }
            GenericParam::Const(cp) => Some(node(
                AstNodeKind::ConstParam,
                vec![ident(&cp.ident), lower_type(&cp.ty)],
            )),
            GenericParam::Lifetime(_) => None,
        })
        .collect();
    node(AstNodeKind::Generics, params)
}

fn lower_bounds<P>(bounds: &Punctuated<TypeParamBound, P>) -> Vec<AstNode> {
    bounds
        .iter()
        .filter_map(|bound| match bound {
            TypeParamBound::Trait(tb) => Some(node(AstNodeKind::TraitBound, vec![lower_path(&tb.path)])),
            _ => None,
        })
        .collect()
}

// ============ Statements ============

fn lower_block(block: &Block) -> AstNode {
    node(AstNodeKind::Block, block.stmts.iter().map(lower_stmt).collect())
}

fn lower_stmt(stmt: &Stmt) -> AstNode {
    match stmt {
        Stmt::Local(local) => {
            let mut children = vec![lower_pat(&local.pat)];
            if let Some(init) = &local.init {
                children.push(lower_expr(&init.expr));
                if let Some((_, diverge)) = &init.diverge {
                    children.push(lower_expr(diverge));
                }
            }
            node(AstNodeKind::LetStmt, children)
        }
        Stmt::Item(item) => lower_item(item),
        Stmt::Expr(expr, _) => lower_expr(expr),
        Stmt::Macro(stmt_macro) => lower_macro(&stmt_macro.mac),
    }
}

// ============ Expressions ============

fn lower_exprs<'e>(exprs: impl IntoIterator<Item = &'e Expr>) -> Vec<AstNode> {
    exprs.into_iter().map(lower_expr).collect()
}

fn lower_expr(expr: &Expr) -> AstNode {
    match expr {
        Expr::Array(e) => node(AstNodeKind::Array, lower_exprs(&e.elems)),
        Expr::Assign(e) => node(
            AstNodeKind::AssignExpr("="),
            vec![lower_expr(&e.left), lower_expr(&e.right)],
        ),
        Expr::Async(e) => node(AstNodeKind::AsyncBlock, vec![lower_block(&e.block)]),
        Expr::Await(e) => node(AstNodeKind::Await, vec![lower_expr(&e.base)]),
        Expr::Binary(e) => {
            let kind = match binary_operator(&e.op) {
                (op, true) => AstNodeKind::AssignExpr(op),
                (op, false) => AstNodeKind::BinaryExpr(op),
            };
            node(kind, vec![lower_expr(&e.left), lower_expr(&e.right)])
        }
        Expr::Block(e) => lower_block(&e.block),
        Expr::Break(e) => node(AstNodeKind::Break, lower_exprs(e.expr.as_deref())),
        Expr::Call(e) => {
            let mut children = vec![lower_expr(&e.func)];
            children.extend(lower_exprs(&e.args));
            node(AstNodeKind::Call, children)
        }
        Expr::Cast(e) => node(AstNodeKind::Cast, vec![lower_expr(&e.expr), lower_type(&e.ty)]),
        Expr::Closure(e) => {
            let mut children: Vec<AstNode> = e.inputs.iter().map(lower_pat).collect();
            if let ReturnType::Type(_, ty) = &e.output {
                children.push(lower_type(ty));
            }
            children.push(lower_expr(&e.body));
            node(AstNodeKind::Closure, children)
        }
        Expr::Const(e) => lower_block(&e.block),
        Expr::Continue(_) => AstNode::new(AstNodeKind::Continue),
        Expr::Field(e) => node(
            AstNodeKind::FieldAccess,
            vec![lower_expr(&e.base), lower_member(&e.member)],
        ),
        Expr::ForLoop(e) => node(
            AstNodeKind::ForLoop,
            vec![lower_pat(&e.pat), lower_expr(&e.expr), lower_block(&e.body)],
        ),
        Expr::Group(e) => lower_expr(&e.expr),
        Expr::If(e) => {
            let mut children = vec![lower_expr(&e.cond), lower_block(&e.then_branch)];
            if let Some((_, else_branch)) = &e.else_branch {
                children.push(lower_expr(else_branch));
            }
            node(AstNodeKind::If, children)
        }
        Expr::Index(e) => node(AstNodeKind::Index, vec![lower_expr(&e.expr), lower_expr(&e.index)]),
        Expr::Infer(_) => AstNode::new(AstNodeKind::Infer),
        Expr::Let(e) => node(AstNodeKind::LetExpr, vec![lower_pat(&e.pat), lower_expr(&e.expr)]),
        Expr::Lit(e) => lower_lit(&e.lit),
        Expr::Loop(e) => node(AstNodeKind::Loop, vec![lower_block(&e.body)]),
        Expr::Macro(e) => lower_macro(&e.mac),
        Expr::Match(e) => {
            let mut children = vec![lower_expr(&e.expr)];
            children.extend(e.arms.iter().map(|arm| {
                let mut parts = vec![lower_pat(&arm.pat)];
                if let Some((_, guard)) = &arm.guard {
                    parts.push(node(AstNodeKind::Guard, vec![lower_expr(guard)]));
                }
                parts.push(lower_expr(&arm.body));
                node(AstNodeKind::Arm, parts)
            }));
            node(AstNodeKind::Match, children)
        }
        Expr::MethodCall(e) => {
            let mut children = vec![lower_expr(&e.receiver), ident(&e.method)];
            if let Some(turbofish) = &e.turbofish {
                children.push(lower_generic_args(&turbofish.args));
            }
            children.extend(lower_exprs(&e.args));
            node(AstNodeKind::MethodCall, children)
        }
        Expr::Paren(e) => node(AstNodeKind::Paren, vec![lower_expr(&e.expr)]),
        Expr::Path(e) => lower_qualified_path(e.qself.as_ref(), &e.path),
        Expr::Range(e) => {
            let mut children = lower_exprs(e.start.as_deref());
            children.extend(lower_exprs(e.end.as_deref()));
            node(AstNodeKind::Range, children)
        }
        Expr::Reference(e) => {
            let op = if e.mutability.is_some() { "&mut" } else { "&" };
            node(AstNodeKind::UnaryExpr(op), vec![lower_expr(&e.expr)])
        }
        Expr::Repeat(e) => node(AstNodeKind::Repeat, vec![lower_expr(&e.expr), lower_expr(&e.len)]),
        Expr::Return(e) => node(AstNodeKind::Return, lower_exprs(e.expr.as_deref())),
        Expr::Struct(e) => {
            let mut children = vec![lower_qualified_path(e.qself.as_ref(), &e.path)];
            children.extend(e.fields.iter().map(lower_field_value));
            children.extend(e.rest.as_deref().map(lower_expr));
            node(AstNodeKind::StructLit, children)
        }
        Expr::Try(e) => node(AstNodeKind::Try, vec![lower_expr(&e.expr)]),
        Expr::TryBlock(e) => lower_block(&e.block),
        Expr::Tuple(e) => node(AstNodeKind::Tuple, lower_exprs(&e.elems)),
        Expr::Unary(e) => node(AstNodeKind::UnaryExpr(unary_operator(&e.op)), vec![lower_expr(&e.expr)]),
        Expr::Unsafe(e) => lower_block(&e.block),
        Expr::While(e) => node(AstNodeKind::While, vec![lower_expr(&e.cond), lower_block(&e.body)]),
        Expr::Yield(e) => node(AstNodeKind::Yield, lower_exprs(e.expr.as_deref())),
        _ => AstNode::new(AstNodeKind::Unknown),
    }
}

fn lower_field_value(field: &FieldValue) -> AstNode {
    // `Point { x, y }`: the shorthand has a single token per field.
    if field.colon_token.is_none() {
        return node(AstNodeKind::FieldValue, vec![lower_member(&field.member)]);
    }
    node(
        AstNodeKind::FieldValue,
        vec![lower_member(&field.member), lower_expr(&field.expr)],
    )
}

fn lower_member(member: &Member) -> AstNode {
    match member {
        Member::Named(name) => ident(name),
        Member::Unnamed(index) => AstNode::lit(index.index.to_string()),
    }
}

/// Operator symbol, and whether it is a compound assignment.
fn binary_operator(op: &BinOp) -> (&'static str, bool) {
    match op {
        BinOp::Add(_) => ("+", false),
        BinOp::Sub(_) => ("-", false),
        BinOp::Mul(_) => ("*", false),
        BinOp::Div(_) => ("/", false),
        BinOp::Rem(_) => ("%", false),
        BinOp::And(_) => ("&&", false),
        BinOp::Or(_) => ("||", false),
        BinOp::BitXor(_) => ("^", false),
        BinOp::BitAnd(_) => ("&", false),
        BinOp::BitOr(_) => ("|", false),
        BinOp::Shl(_) => ("<<", false),
        BinOp::Shr(_) => (">>", false),
        BinOp::Eq(_) => ("==", false),
        BinOp::Lt(_) => ("<", false),
        BinOp::Le(_) => ("<=", false),
        BinOp::Ne(_) => ("!=", false),
        BinOp::Ge(_) => (">=", false),
        BinOp::Gt(_) => (">", false),
        BinOp::AddAssign(_) => ("+=", true),
        BinOp::SubAssign(_) => ("-=", true),
        BinOp::MulAssign(_) => ("*=", true),
        BinOp::DivAssign(_) => ("/=", true),
        BinOp::RemAssign(_) => ("%=", true),
        BinOp::BitXorAssign(_) => ("^=", true),
        BinOp::BitAndAssign(_) => ("&=", true),
        BinOp::BitOrAssign(_) => ("|=", true),
        BinOp::ShlAssign(_) => ("<<=", true),
        BinOp::ShrAssign(_) => (">>=", true),
        _ => ("?", false),
    }
}

fn unary_operator(op: &UnOp) -> &'static str {
    match op {
        UnOp::Deref(_) => "*",
        UnOp::Not(_) => "!",
        UnOp::Neg(_) => "-",
        _ => "?",
    }
}

fn lower_lit(lit: &Lit) -> AstNode {
    let text = match lit {
        Lit::Str(l) => l.token().to_string(),
        Lit::ByteStr(l) => l.token().to_string(),
        Lit::CStr(l) => l.token().to_string(),
        Lit::Byte(l) => l.token().to_string(),
        Lit::Char(l) => l.token().to_string(),
        Lit::Int(l) => l.token().to_string(),
        Lit::Float(l) => l.token().to_string(),
        Lit::Bool(l) => l.value.to_string(),
        Lit::Verbatim(l) => l.to_string(),
        _ => return AstNode::new(AstNodeKind::Unknown),
    };
    AstNode::lit(text)
}

/// `name!(args)`: the macro path, then its arguments if they form an expression list.
fn lower_macro(mac: &Macro) -> AstNode {
    let mut children = vec![lower_path(&mac.path)];
    if let Ok(args) = mac.parse_body_with(Punctuated::<Expr, syn::Token![,]>::parse_terminated) {
        children.extend(lower_exprs(&args));
    }
    node(AstNodeKind::MacroCall, children)
}

// ============ Paths ============

/// A bare single-segment path is the identifier itself; anything longer keeps
/// a `Path` node with one `Ident` per segment.
fn lower_path(path: &Path) -> AstNode {
    if path.leading_colon.is_none() && path.segments.len() == 1 {
        let segment = &path.segments[0];
        if segment.arguments.is_none() {
            return ident(&segment.ident);
        }
    }
    node(AstNodeKind::Path, path_segments(path))
}

fn lower_qualified_path(qself: Option<&syn::QSelf>, path: &Path) -> AstNode {
    match qself {
        None => lower_path(path),
        Some(q) => {
            let mut children = vec![lower_type(&q.ty)];
            children.extend(path_segments(path));
            node(AstNodeKind::Path, children)
        }
    }
}

fn path_segments(path: &Path) -> Vec<AstNode> {
    let mut children = Vec::new();
    for segment in &path.segments {
        children.push(ident(&segment.ident));
        match &segment.arguments {
            PathArguments::None => {}
            PathArguments::AngleBracketed(args) => children.push(lower_generic_args(&args.args)),
            PathArguments::Parenthesized(args) => {
                let mut types: Vec<AstNode> = args.inputs.iter().map(lower_type).collect();
                if let ReturnType::Type(_, ty) = &args.output {
                    types.push(lower_type(ty));
                }
                children.push(node(AstNodeKind::GenericArgs, types));
            }
        }
    }
    children
}

fn lower_generic_args<P>(args: &Punctuated<GenericArgument, P>) -> AstNode {
    let children = args
        .iter()
        .filter_map(|arg| match arg {
            GenericArgument::Type(ty) => Some(lower_type(ty)),
            GenericArgument::Const(expr) => Some(lower_expr(expr)),
            GenericArgument::AssocType(assoc) => Some(node(
                AstNodeKind::AssocType,
                vec![ident(&assoc.ident), lower_type(&assoc.ty)],
            )),
            _ => None,
        })
        .collect();
    node(AstNodeKind::GenericArgs, children)
}

// ============ Patterns ============

fn lower_pat(pat: &Pat) -> AstNode {
    match pat {
        Pat::Const(p) => lower_block(&p.block),
        Pat::Ident(p) => match &p.subpat {
            // `name @ subpattern`
            Some((_, sub)) => node(AstNodeKind::BindingPat, vec![ident(&p.ident), lower_pat(sub)]),
            None => ident(&p.ident),
        },
        Pat::Lit(p) => lower_lit(&p.lit),
        Pat::Macro(p) => lower_macro(&p.mac),
        Pat::Or(p) => node(AstNodeKind::OrPat, p.cases.iter().map(lower_pat).collect()),
        Pat::Paren(p) => lower_pat(&p.pat),
        Pat::Path(p) => lower_qualified_path(p.qself.as_ref(), &p.path),
        Pat::Range(p) => {
            let mut children = lower_exprs(p.start.as_deref());
            children.extend(lower_exprs(p.end.as_deref()));
            node(AstNodeKind::RangePat, children)
        }
        Pat::Reference(p) => node(AstNodeKind::RefPat, vec![lower_pat(&p.pat)]),
        Pat::Rest(_) => AstNode::new(AstNodeKind::RestPat),
        Pat::Slice(p) => node(AstNodeKind::SlicePat, p.elems.iter().map(lower_pat).collect()),
        Pat::Struct(p) => {
            let mut children = vec![lower_qualified_path(p.qself.as_ref(), &p.path)];
            children.extend(p.fields.iter().map(lower_field_pat));
            if p.rest.is_some() {
                children.push(AstNode::new(AstNodeKind::RestPat));
            }
            node(AstNodeKind::StructPat, children)
        }
        Pat::Tuple(p) => node(AstNodeKind::TuplePat, p.elems.iter().map(lower_pat).collect()),
        Pat::TupleStruct(p) => {
            let mut children = vec![lower_qualified_path(p.qself.as_ref(), &p.path)];
            children.extend(p.elems.iter().map(lower_pat));
            node(AstNodeKind::TupleStructPat, children)
        }
        Pat::Type(p) => node(AstNodeKind::TypedPat, vec![lower_pat(&p.pat), lower_type(&p.ty)]),
        Pat::Wild(_) => AstNode::new(AstNodeKind::WildPat),
        _ => AstNode::new(AstNodeKind::Unknown),
    }
}

fn lower_field_pat(field: &FieldPat) -> AstNode {
    if field.colon_token.is_none() {
        return node(AstNodeKind::FieldPat, vec![lower_pat(&field.pat)]);
    }
    node(
        AstNodeKind::FieldPat,
        vec![lower_member(&field.member), lower_pat(&field.pat)],
    )
}

// ============ Types ============

fn lower_type(ty: &Type) -> AstNode {
    match ty {
        Type::Array(t) => node(AstNodeKind::ArrayType, vec![lower_type(&t.elem), lower_expr(&t.len)]),
        Type::BareFn(t) => {
            let mut children = Vec::new();
            for arg in &t.inputs {
                if let Some((name, _)) = &arg.name {
                    children.push(ident(name));
                }
                children.push(lower_type(&arg.ty));
            }
            if let ReturnType::Type(_, ret) = &t.output {
                children.push(lower_type(ret));
            }
            node(AstNodeKind::FnType, children)
        }
        Type::Group(t) => lower_type(&t.elem),
        Type::ImplTrait(t) => node(AstNodeKind::ImplTrait, lower_bounds(&t.bounds)),
        Type::Infer(_) => AstNode::new(AstNodeKind::InferType),
        Type::Macro(t) => lower_macro(&t.mac),
        Type::Never(_) => AstNode::new(AstNodeKind::NeverType),
        Type::Paren(t) => lower_type(&t.elem),
        Type::Path(t) => lower_qualified_path(t.qself.as_ref(), &t.path),
        Type::Ptr(t) => node(AstNodeKind::PtrType, vec![lower_type(&t.elem)]),
        Type::Reference(t) => node(AstNodeKind::RefType, vec![lower_type(&t.elem)]),
        Type::Slice(t) => node(AstNodeKind::SliceType, vec![lower_type(&t.elem)]),
        Type::TraitObject(t) => node(AstNodeKind::TraitObject, lower_bounds(&t.bounds)),
        Type::Tuple(t) => node(AstNodeKind::TupleType, t.elems.iter().map(lower_type).collect()),
        _ => AstNode::new(AstNodeKind::Unknown),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lower(src: &str) -> AstNode {
        lower_file(&syn::parse_file(src).unwrap())
    }

    fn tags(node: &AstNode) -> Vec<String> {
        node.children.iter().map(AstNode::tag).collect()
    }

    #[test]
    fn test_function_shape() {
        let file = lower("fn add(a: i32, b: i32) -> i32 { return a + b; }");
        let func = &file.children[0];
        assert_eq!(func.tag(), "FunctionDecl");
        assert_eq!(tags(func), vec!["Ident", "Params", "Results", "Block"]);
        assert_eq!(func.function_name(), Some("add"));

        let ret = &func.children[3].children[0];
        assert_eq!(ret.tag(), "Return");
        assert_eq!(ret.children[0].tag(), "BinaryExpr:+");
    }

    #[test]
    fn test_methods_and_receivers() {
        let file = lower(
            "struct S; impl S { fn get(&self) -> u8 { 0 } } trait T { fn req(&mut self); fn def() {} }",
        );
        assert_eq!(tags(&file), vec!["Item", "Impl", "Trait"]);
        let get = &file.children[1].children[0];
        assert_eq!(get.children[1].children[0].tag(), "Receiver");
        assert_eq!(get.children[1].children[0].children[0].token(), Some("self"));

        let req = &file.children[2].children[0];
        assert_eq!(tags(req), vec!["Ident", "Params"]);
    }

    #[test]
    fn test_compound_assignment_and_reference() {
        let file = lower("fn f(mut x: u32, y: &mut u32) { x += 1; *y = x; let r = &mut x; }");
        let body = &file.children[0].children[2];
        assert_eq!(tags(body), vec!["AssignExpr:+=", "AssignExpr:=", "LetStmt"]);
        assert_eq!(body.children[1].children[0].tag(), "UnaryExpr:*");
        assert_eq!(body.children[2].children[1].tag(), "UnaryExpr:&mut");
    }

    #[test]
    fn test_literals_are_verbatim() {
        let file = lower(r#"fn f() { g("a,b", 1u32, 2.5, 'c', true); }"#);
        let call = &file.children[0].children[2].children[0];
        let tokens: Vec<_> = call.children.iter().filter_map(AstNode::token).collect();
        assert_eq!(tokens, vec!["g", "\"a,b\"", "1u32", "2.5", "'c'", "true"]);
    }

    #[test]
    fn test_paths() {
        let file = lower("fn f() { std::mem::drop(x); Vec::<u8>::new(); }");
        let body = &file.children[0].children[2];
        let drop_path = &body.children[0].children[0];
        assert_eq!(drop_path.tag(), "Path");
        let segments: Vec<_> = drop_path.children.iter().filter_map(AstNode::token).collect();
        assert_eq!(segments, vec!["std", "mem", "drop"]);

        let new_path = &body.children[1].children[0];
        assert_eq!(tags(new_path), vec!["Ident", "GenericArgs", "Ident"]);
    }

    #[test]
    fn test_macro_arguments() {
        let file = lower(r#"fn f(x: u8) { println!("{}", x); let v = vec![0; 4]; }"#);
        let body = &file.children[0].children[2];
        let println = &body.children[0];
        assert_eq!(println.tag(), "MacroCall");
        let tokens: Vec<_> = println.children.iter().filter_map(AstNode::token).collect();
        assert_eq!(tokens, vec!["println", "\"{}\"", "x"]);

        // `[0; 4]` is not an expression list: only the macro name remains.
        let vec_macro = &body.children[1].children[1];
        assert_eq!(vec_macro.children.len(), 1);
    }

    #[test]
    fn test_struct_shorthand_and_tuple_field() {
        let file = lower("fn f(p: P) { let q = P { x, y: p.0 }; }");
        let lit = &file.children[0].children[2].children[0].children[1];
        assert_eq!(lit.tag(), "StructLit");
        assert_eq!(lit.children[1].children.len(), 1);
        let field_access = &lit.children[2].children[1];
        assert_eq!(field_access.tag(), "FieldAccess");
        assert_eq!(field_access.children[1].token(), Some("0"));
    }

    #[test]
    fn test_control_flow() {
        let file = lower(
            "fn f(v: Vec<u8>) { for i in v { if i > 2 { break; } else { continue; } } \
             match v.len() { 0 => {}, n if n > 1 => {}, _ => {} } }",
        );
        let body = &file.children[0].children[2];
        assert_eq!(tags(body), vec!["ForLoop", "Match"]);
        assert_eq!(tags(&body.children[0]), vec!["Ident", "Ident", "Block"]);
        let arms = &body.children[1];
        assert_eq!(tags(arms), vec!["MethodCall", "Arm", "Arm", "Arm"]);
        assert_eq!(tags(&arms.children[2]), vec!["Ident", "Guard", "Block"]);
        assert_eq!(arms.children[3].children[0].tag(), "WildPat");
    }

    #[test]
    fn test_nested_function_and_closure() {
        let file = lower("fn outer() { fn inner() {} let c = |a| a + 1; }");
        let body = &file.children[0].children[2];
        assert_eq!(body.children[0].tag(), "FunctionDecl");
        assert_eq!(body.children[1].children[1].tag(), "Closure");
    }

    #[test]
    fn test_inline_modules() {
        let file = lower("mod m { fn a() {} mod n { fn b() {} } } mod ext;");
        assert_eq!(tags(&file), vec!["Mod", "Mod"]);
        assert_eq!(tags(&file.children[0]), vec!["FunctionDecl", "Mod"]);
        assert!(file.children[1].children.is_empty());
    }
}
