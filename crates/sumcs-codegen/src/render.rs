use crate::{
    ast::{
        Expression, Ident, Member, Method, Modifier, Parameter, Section, SourceFile, Type,
        TypeDeclaration, TypeKind,
    },
    emitter::Emitter,
};

pub fn render_source_file(source_file: &SourceFile) -> String {
    let mut emitter = Emitter::new();
    source_file.render(&mut emitter);
    debug_assert_eq!(emitter.depth(), 0, "unclosed scopes");
    emitter.finish()
}

/// Things that occupy whole lines.
pub(crate) trait Render {
    fn render(&self, emitter: &mut Emitter);
}

/// Things that render within a single line.
pub(crate) trait RenderInline {
    fn render_inline(&self, accum: &mut String);
}

fn inline<T: RenderInline + ?Sized>(renderable: &T) -> String {
    let mut accum = String::new();
    renderable.render_inline(&mut accum);
    accum
}

fn comma_separated<T: RenderInline>(renderables: &[T], accum: &mut String) {
    for (i, renderable) in renderables.iter().enumerate() {
        if i > 0 {
            accum.push_str(", ");
        }
        renderable.render_inline(accum);
    }
}

impl Render for SourceFile {
    fn render(&self, emitter: &mut Emitter) {
        let warnings = self.suppressed_warnings.join(", ");
        if !warnings.is_empty() {
            emitter.line(&format!("#pragma warning disable {}", warnings));
        }
        for import in self.imports.iter() {
            emitter.line(import);
        }
        if let Some(ref namespace) = self.namespace {
            emitter.line(&format!("namespace {};", namespace));
        }
        self.declaration.render(emitter);
        if !warnings.is_empty() {
            emitter.line(&format!("#pragma warning restore {}", warnings));
        }
    }
}

impl Render for TypeDeclaration {
    fn render(&self, emitter: &mut Emitter) {
        let mut header = String::new();
        modifiers(&self.modifiers, &mut header);
        header.push_str(match self.kind {
            TypeKind::Record => "record ",
            TypeKind::Class => "class ",
        });
        self.ident.render_inline(&mut header);
        type_parameters(&self.type_parameters, &mut header);
        if let Some(ref base) = self.base {
            header.push_str(" : ");
            base.render_inline(&mut header);
        }

        emitter.open_block(&header);
        let mut sections = self.sections.iter().filter(|section| !section.0.is_empty());
        if let Some(first) = sections.next() {
            first.render(emitter);
            for section in sections {
                emitter.blank_line();
                section.render(emitter);
            }
        }
        emitter.close("");
    }
}

impl Render for Section {
    fn render(&self, emitter: &mut Emitter) {
        self.0.iter().for_each(|member| member.render(emitter));
    }
}

impl Render for Member {
    fn render(&self, emitter: &mut Emitter) {
        match self {
            Self::Constructor {
                modifiers: mods,
                ident,
            } => {
                let mut line = String::new();
                modifiers(mods, &mut line);
                ident.render_inline(&mut line);
                line.push_str("() {}");
                emitter.line(&line);
            }
            Self::Method(method) => method.render(emitter),
            Self::ImplicitConversion {
                target,
                parameter,
                body,
            } => {
                emitter.line(&format!(
                    "public static implicit operator {target}({parameter}) => {body};",
                    target = inline(target),
                    parameter = inline(parameter),
                    body = inline(body),
                ));
            }
            Self::Type(type_declaration) => type_declaration.render(emitter),
        }
    }
}

impl Render for Method {
    fn render(&self, emitter: &mut Emitter) {
        let mut head = String::new();
        modifiers(&self.modifiers, &mut head);
        self.return_type.render_inline(&mut head);
        head.push(' ');
        self.ident.render_inline(&mut head);
        type_parameters(&self.type_parameters, &mut head);

        let tail = match self.body {
            None => String::from(";"),
            Some(ref body) => format!(" => {};", inline(body)),
        };

        if self.parameters.is_empty() {
            emitter.line(&format!("{}(){}", head, tail));
            return;
        }

        emitter.open_list(&head);
        let last = self.parameters.len() - 1;
        for (i, parameter) in self.parameters.iter().enumerate() {
            let mut line = inline(parameter);
            if i < last {
                line.push(',');
            }
            emitter.line(&line);
        }
        emitter.close(&tail);
    }
}

fn modifiers(modifiers: &[Modifier], accum: &mut String) {
    for modifier in modifiers {
        accum.push_str(modifier.keyword());
        accum.push(' ');
    }
}

fn type_parameters(type_parameters: &[Ident], accum: &mut String) {
    if type_parameters.is_empty() {
        return;
    }
    accum.push('<');
    comma_separated(type_parameters, accum);
    accum.push('>');
}

impl RenderInline for Ident {
    fn render_inline(&self, accum: &mut String) {
        accum.push_str(&self.0);
    }
}

impl RenderInline for Type {
    fn render_inline(&self, accum: &mut String) {
        match self {
            Self::Void => accum.push_str("void"),
            Self::Named { ident, arguments } => {
                ident.render_inline(accum);
                if !arguments.is_empty() {
                    accum.push('<');
                    comma_separated(arguments, accum);
                    accum.push('>');
                }
            }
            Self::Verbatim(syntax) => accum.push_str(syntax),
        }
    }
}

impl RenderInline for Parameter {
    fn render_inline(&self, accum: &mut String) {
        self.r#type.render_inline(accum);
        accum.push(' ');
        self.ident.render_inline(accum);
    }
}

impl RenderInline for Expression {
    fn render_inline(&self, accum: &mut String) {
        match self {
            Self::This => accum.push_str("this"),
            Self::Variable(ident) => ident.render_inline(accum),
            Self::String(value) => {
                accum.push('"');
                for c in value.chars() {
                    match c {
                        '"' => accum.push_str("\\\""),
                        '\\' => accum.push_str("\\\\"),
                        '\n' => accum.push_str("\\n"),
                        _ => accum.push(c),
                    }
                }
                accum.push('"');
            }
            Self::Call {
                function,
                arguments,
            } => {
                function.render_inline(accum);
                accum.push('(');
                comma_separated(arguments, accum);
                accum.push(')');
            }
            Self::New { r#type, arguments } => {
                accum.push_str("new ");
                r#type.render_inline(accum);
                accum.push('(');
                comma_separated(arguments, accum);
                accum.push(')');
            }
            Self::Throw(exception) => {
                accum.push_str("throw ");
                exception.render_inline(accum);
            }
        }
    }
}
