use crate::model::document::{MockDocument, Version, new_document_id};

const SAMPLE_TITLE: &str = "Monografia em Informática - Redes Neurais Aplicadas";

const SAMPLE_BODY: &str = "## Resumo

Este trabalho apresenta uma análise abrangente sobre a aplicação de redes neurais em sistemas de informação modernos. O objetivo principal é demonstrar como essas tecnologias podem ser implementadas para resolver problemas complexos de classificação e predição.

**Palavras-chave:** Redes Neurais, Deep Learning, Inteligência Artificial, Machine Learning

## 1. Introdução

A inteligência artificial tem revolucionado diversos setores da sociedade moderna. As redes neurais, em particular, representam uma das abordagens mais promissoras para resolver problemas complexos que envolvem reconhecimento de padrões e tomada de decisões automatizadas.

### 1.1 Objetivos

O objetivo geral deste trabalho é...

### 1.2 Justificativa

A escolha deste tema justifica-se pela crescente importância...

## 2. Fundamentação Teórica

### 2.1 Redes Neurais

As redes neurais artificiais são modelos computacionais inspirados no funcionamento do cérebro humano...

### 2.2 Deep Learning

O deep learning representa uma evolução das redes neurais tradicionais...

## 3. Metodologia

Para o desenvolvimento desta pesquisa, foi adotada uma abordagem...

## 4. Resultados

Os resultados obtidos demonstram...

## 5. Conclusão

Com base nos estudos realizados, pode-se concluir que...

## Referências

1. GOODFELLOW, Ian; BENGIO, Yoshua; COURVILLE, Aaron. Deep Learning. MIT Press, 2016.
2. RUSSELL, Stuart; NORVIG, Peter. Artificial Intelligence: A Modern Approach. 4th ed. Pearson, 2020.";

fn version(id: u32, timestamp: &str, author: &str, action: &str, size: &str) -> Version {
    Version {
        id,
        timestamp: timestamp.to_string(),
        author: author.to_string(),
        action: action.to_string(),
        size: size.to_string(),
    }
}

/// The fabricated document every Studio id opens.
pub(super) fn sample_document(document_id: &str) -> MockDocument {
    MockDocument {
        id: document_id.to_string(),
        title: SAMPLE_TITLE.to_string(),
        document_type: "Monografia".to_string(),
        course: "Informática".to_string(),
        author: "João Pedro Silva".to_string(),
        created_at: "2024-01-15".to_string(),
        modified_at: "2024-01-20".to_string(),
        status: "Gerado".to_string(),
        pages: 45,
        word_count: 12500,
        versions: vec![
            version(1, "2024-01-20 14:30", "João Pedro", "Editado no Studio", "12.5k palavras"),
            version(2, "2024-01-20 10:15", "Sistema", "Gerado automaticamente", "11.8k palavras"),
            version(3, "2024-01-19 16:45", "João Pedro", "Rascunho salvo", "8.2k palavras"),
        ],
        content: format!("# {}\n\n{}", SAMPLE_TITLE, SAMPLE_BODY),
    }
}

/// Placeholder shown when Studio is opened without a document id. It gets a
/// fresh id so saves have a key.
pub(super) fn blank_document() -> MockDocument {
    MockDocument {
        id: new_document_id(),
        title: String::new(),
        document_type: String::new(),
        course: String::new(),
        author: String::new(),
        created_at: String::new(),
        modified_at: String::new(),
        status: "Rascunho".to_string(),
        pages: 0,
        word_count: 0,
        versions: Vec::new(),
        content: String::new(),
    }
}
