use proc_macro::TokenStream;
use quote::{format_ident, quote};
use regfsm_compiler::{
    Automaton, CharRange, PatternError, Repetition, Span, State, StateKind, compile,
};
use syn::LitStr;

/// Compile a pattern while the crate is being built.
///
/// Expands to a `&'static regfsm::StaticAutomaton`. Malformed patterns are
/// reported as compile errors on the pattern literal.
///
/// ```ignore
/// use regfsm::Fsm;
///
/// let digits = regfsm_macros::regex_fsm!("[0-9]+");
/// assert!(digits.is_match("42"));
/// ```
#[proc_macro]
pub fn regex_fsm(input: TokenStream) -> TokenStream {
    match expand_regex_fsm(input.into()) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_regex_fsm(input: proc_macro2::TokenStream) -> syn::Result<proc_macro2::TokenStream> {
    let literal: LitStr = syn::parse2(input)?;
    let automaton = compile(&literal.value())
        .map_err(|err| syn::Error::new(literal.span(), describe_pattern_error(&err)))?;
    Ok(emit_codegen(&automaton))
}

fn describe_pattern_error(err: &PatternError) -> String {
    format!("invalid pattern: {}", err)
}

fn emit_codegen(automaton: &Automaton) -> proc_macro2::TokenStream {
    let states_len = automaton.states().len();
    let edges_len = automaton.edges().len();
    let members_len = automaton.members().len();
    let ranges_len = automaton.ranges().len();

    let states = automaton.states().iter().map(emit_state);
    let edges = automaton.edges().iter().map(|id| {
        let raw = id.raw();
        quote! { regfsm::StateId::new(#raw) }
    });
    let members = automaton.members().iter().map(emit_kind);
    let ranges = automaton.ranges().iter().map(emit_range);

    let states_ident = format_ident!("__REGFSM_STATES");
    let edges_ident = format_ident!("__REGFSM_EDGES");
    let members_ident = format_ident!("__REGFSM_MEMBERS");
    let ranges_ident = format_ident!("__REGFSM_RANGES");
    let automaton_ident = format_ident!("__REGFSM_AUTOMATON");

    quote! {
        {
            static #states_ident: [regfsm::State; #states_len] = [#(#states),*];
            static #edges_ident: [regfsm::StateId; #edges_len] = [#(#edges),*];
            static #members_ident: [regfsm::StateKind; #members_len] = [#(#members),*];
            static #ranges_ident: [regfsm::CharRange; #ranges_len] = [#(#ranges),*];
            static #automaton_ident: regfsm::StaticAutomaton = regfsm::StaticAutomaton::from_parts(
                &#states_ident,
                &#edges_ident,
                &#members_ident,
                &#ranges_ident,
            );
            &#automaton_ident
        }
    }
}

fn emit_state(state: &State) -> proc_macro2::TokenStream {
    let kind = emit_kind(&state.kind);
    let repeat = match state.repeat {
        Repetition::Once => quote! { regfsm::Repetition::Once },
        Repetition::ZeroOrMore => quote! { regfsm::Repetition::ZeroOrMore },
        Repetition::OneOrMore => quote! { regfsm::Repetition::OneOrMore },
    };
    let edges = emit_span(state.edges);
    quote! {
        regfsm::State {
            kind: #kind,
            repeat: #repeat,
            edges: #edges,
        }
    }
}

fn emit_kind(kind: &StateKind) -> proc_macro2::TokenStream {
    match *kind {
        StateKind::Start => quote! { regfsm::StateKind::Start },
        StateKind::Termination => quote! { regfsm::StateKind::Termination },
        StateKind::Literal(ch) => quote! { regfsm::StateKind::Literal(#ch) },
        StateKind::Wildcard => quote! { regfsm::StateKind::Wildcard },
        StateKind::Range { ranges, negated } => {
            let ranges = emit_span(ranges);
            quote! { regfsm::StateKind::Range { ranges: #ranges, negated: #negated } }
        }
        StateKind::Class { members, negated } => {
            let members = emit_span(members);
            quote! { regfsm::StateKind::Class { members: #members, negated: #negated } }
        }
    }
}

fn emit_span(span: Span) -> proc_macro2::TokenStream {
    let first = span.first;
    let len = span.len;
    quote! { regfsm::Span::new(#first, #len) }
}

fn emit_range(range: &CharRange) -> proc_macro2::TokenStream {
    let start = range.start;
    let end = range.end;
    quote! { regfsm::CharRange::new(#start, #end) }
}
