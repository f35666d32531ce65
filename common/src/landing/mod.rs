//! Landing page content and the FAQ accordion.

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: [FaqEntry; 4] = [
    FaqEntry {
        question: "O SaberAngola é gratuito?",
        answer: "Sim! Oferecemos uma versão gratuita com acesso a modelos básicos. Também temos planos premium com recursos avançados e mais modelos profissionais.",
    },
    FaqEntry {
        question: "Posso editar os documentos depois de baixar?",
        answer: "Sim! Os documentos são gerados em formato Word (.docx), permitindo edições posteriores completas. Também oferecemos exportação em PDF para envio direto.",
    },
    FaqEntry {
        question: "Os modelos seguem padrões angolanos?",
        answer: "Absolutamente! Todos os nossos modelos foram criados especificamente para o contexto acadêmico e profissional angolano, seguindo normas locais e internacionais.",
    },
    FaqEntry {
        question: "Como posso obter suporte?",
        answer: "Oferecemos suporte completo através do nosso sistema de tickets, chat online e seção de guias com tutoriais detalhados e FAQ abrangente.",
    },
];

/// Figures of the stats band.
pub const STATS: [(&str, &str); 4] = [
    ("5,000+", "Estudantes Registados"),
    ("15,000+", "Documentos Criados"),
    ("50+", "Modelos Disponíveis"),
    ("98%", "Satisfação dos Usuários"),
];

/// "Como Funciona" steps: title and blurb.
pub const STEPS: [(&str, &str); 3] = [
    (
        "Escolha um Modelo",
        "Navegue pela nossa biblioteca de modelos profissionais e escolha o que melhor se adequa às suas necessidades acadêmicas",
    ),
    (
        "Preencha os Dados",
        "Complete o formulário intuitivo com as suas informações pessoais, acadêmicas e profissionais",
    ),
    (
        "Baixe o Documento",
        "Gere e baixe o seu documento em formato Word ou PDF, pronto para usar profissionalmente",
    ),
];

/// Plan sent to the checkout endpoint by the "Assinar Premium" buttons.
pub const PREMIUM_PLAN: &str = "premium";

/// At most one FAQ entry open at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    /// Opens `index`, or closes it if it is already open.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) { None } else { Some(index) };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accordion_keeps_one_open() {
        let mut accordion = Accordion::default();
        accordion.toggle(1);
        assert!(accordion.is_open(1));
        accordion.toggle(2);
        assert!(!accordion.is_open(1));
        assert!(accordion.is_open(2));
        accordion.toggle(2);
        assert!(!accordion.is_open(2));
    }
}
