//! Built-in demonstration records used when no record file is supplied.

pub const SAMPLE_RECORDS_JSON: &str = r#"[
  {
    "id": "1", "patientName": "Maria Silva Santos", "patientId": "P001",
    "admissionDate": "2024-01-15T08:30:00", "department": "Cardiologia",
    "doctor": "Dr. João Carvalho", "roomNumber": "101A",
    "status": "Em Tratamento", "priority": "Alta",
    "diagnosis": "Infarto agudo do miocárdio", "treatment": "Angioplastia coronária",
    "insurance": "Unimed", "cost": 15750.50, "lastUpdate": "2024-01-16T14:20:00"
  },
  {
    "id": "2", "patientName": "José Pereira Lima", "patientId": "P002",
    "admissionDate": "2024-01-14T22:10:00", "department": "Neurologia",
    "doctor": "Dra. Ana Beatriz Costa", "roomNumber": "204B",
    "status": "Admitido", "priority": "Crítica",
    "diagnosis": "Acidente vascular cerebral isquêmico", "treatment": "Trombólise endovenosa",
    "insurance": "Bradesco Saúde", "cost": 28430.00, "lastUpdate": "2024-01-16T09:05:00"
  },
  {
    "id": "3", "patientName": "Ana Clara Rodrigues", "patientId": "P003",
    "admissionDate": "2024-01-10T11:45:00", "dischargeDate": "2024-01-14T16:00:00",
    "department": "Ortopedia", "doctor": "Dr. Paulo Mendes", "roomNumber": "305",
    "status": "Alta", "priority": "Baixa",
    "diagnosis": "Fratura de rádio distal", "treatment": "Redução e imobilização gessada",
    "insurance": "SulAmérica", "cost": 4210.75, "lastUpdate": "2024-01-14T16:00:00"
  },
  {
    "id": "4", "patientName": "Carlos Eduardo Souza", "patientId": "P004",
    "admissionDate": "2024-01-12T07:20:00", "department": "UTI",
    "doctor": "Dra. Fernanda Alves", "roomNumber": "UTI-02",
    "status": "Em Tratamento", "priority": "Crítica",
    "diagnosis": "Sepse de foco pulmonar", "treatment": "Antibioticoterapia e ventilação mecânica",
    "insurance": "SUS", "cost": 52300.00, "lastUpdate": "2024-01-16T18:40:00"
  },
  {
    "id": "5", "patientName": "Beatriz Oliveira Maria", "patientId": "P005",
    "admissionDate": "2024-01-16T13:15:00", "department": "Pediatria",
    "doctor": "Dr. Ricardo Nunes", "roomNumber": "110",
    "status": "Admitido", "priority": "Média",
    "diagnosis": "Bronquiolite viral aguda", "treatment": "Oxigenoterapia e hidratação",
    "insurance": "Amil", "cost": 3120.40, "lastUpdate": "2024-01-16T15:30:00"
  },
  {
    "id": "6", "patientName": "Roberto Almeida Gomes", "patientId": "P006",
    "admissionDate": "2024-01-08T09:00:00", "dischargeDate": "2024-01-13T10:30:00",
    "department": "Cardiologia", "doctor": "Dr. João Carvalho", "roomNumber": "102B",
    "status": "Transferido", "priority": "Alta",
    "diagnosis": "Insuficiência cardíaca descompensada", "treatment": "Diureticoterapia",
    "insurance": "Unimed", "cost": 9875.20, "lastUpdate": "2024-01-13T10:30:00"
  },
  {
    "id": "7", "patientName": "Luiza Fernandes Rocha", "patientId": "P007",
    "admissionDate": "2024-01-11T17:50:00", "department": "Oncologia",
    "doctor": "Dra. Mariana Teixeira", "roomNumber": "402",
    "status": "Em Tratamento", "priority": "Média",
    "diagnosis": "Linfoma de Hodgkin", "treatment": "Quimioterapia ABVD",
    "insurance": "Porto Seguro Saúde", "cost": 34560.90, "lastUpdate": "2024-01-16T08:10:00"
  },
  {
    "id": "8", "patientName": "Antônio Barbosa Dias", "patientId": "P008",
    "admissionDate": "2024-01-05T03:25:00", "dischargeDate": "2024-01-09T21:15:00",
    "department": "UTI", "doctor": "Dra. Fernanda Alves", "roomNumber": "UTI-05",
    "status": "Falecido", "priority": "Crítica",
    "diagnosis": "Choque cardiogênico", "treatment": "Suporte hemodinâmico",
    "insurance": "SUS", "cost": 61240.00, "lastUpdate": "2024-01-09T21:15:00"
  },
  {
    "id": "9", "patientName": "Fernanda Costa Ribeiro", "patientId": "P009",
    "admissionDate": "2024-01-15T19:40:00", "department": "Neurologia",
    "doctor": "Dr. Marcelo Prado", "roomNumber": "207",
    "status": "Admitido", "priority": "Baixa",
    "diagnosis": "Enxaqueca crônica refratária", "treatment": "Bloqueio anestésico",
    "insurance": "Bradesco Saúde", "cost": 1850.00, "lastUpdate": "2024-01-16T07:55:00"
  },
  {
    "id": "10", "patientName": "Gabriel Martins Araújo", "patientId": "P010",
    "admissionDate": "2024-01-13T12:05:00", "department": "Ortopedia",
    "doctor": "Dr. Paulo Mendes", "roomNumber": "308",
    "status": "Em Tratamento", "priority": "Média",
    "diagnosis": "Lesão do ligamento cruzado anterior", "treatment": "Reconstrução artroscópica",
    "insurance": "Amil", "cost": 18990.00, "lastUpdate": "2024-01-16T11:25:00"
  }
]"#;
